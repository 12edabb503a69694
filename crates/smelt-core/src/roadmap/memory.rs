//! In-memory roadmap backend.

use std::collections::BTreeMap;

use super::{validate_description, RoadmapStore};
use crate::{
    error::{Result, SmeltError},
    models::Step,
};

/// Roadmap kept in a `BTreeMap`, so iteration is already in id order.
///
/// Nothing is persisted; the roadmap lives as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    steps: BTreeMap<u64, Step>,
    last_id: u64,
}

impl MemoryStore {
    /// Creates an empty roadmap.
    pub fn new() -> Self {
        Self::default()
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Step> {
        self.steps
            .get_mut(&id)
            .ok_or(SmeltError::StepNotFound { id })
    }
}

impl RoadmapStore for MemoryStore {
    fn add_step(&mut self, description: &str) -> Result<u64> {
        validate_description(description)?;

        self.last_id += 1;
        let id = self.last_id;
        self.steps.insert(
            id,
            Step {
                id,
                description: description.to_string(),
                done: false,
            },
        );
        Ok(id)
    }

    fn next_step(&self) -> Result<Option<Step>> {
        Ok(self.steps.values().find(|step| step.is_pending()).cloned())
    }

    fn mark_done(&mut self, id: u64) -> Result<()> {
        self.get_mut(id)?.done = true;
        Ok(())
    }

    fn reset_step(&mut self, id: u64) -> Result<()> {
        self.get_mut(id)?.done = false;
        Ok(())
    }

    fn remove_step(&mut self, id: u64) -> Result<()> {
        self.steps
            .remove(&id)
            .map(|_| ())
            .ok_or(SmeltError::StepNotFound { id })
    }

    fn all_steps(&self) -> Result<Vec<Step>> {
        Ok(self.steps.values().cloned().collect())
    }

    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParsedStep;

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut store = MemoryStore::new();
        let first = store.add_step("First").unwrap();
        store.remove_step(first).unwrap();
        let second = store.add_step("Second").unwrap();

        assert!(second > first);
        assert!(matches!(
            store.mark_done(first),
            Err(SmeltError::StepNotFound { id }) if id == first
        ));
    }

    #[test]
    fn test_whitespace_description_rejected() {
        let mut store = MemoryStore::new();
        let err = store.add_step("   ").unwrap_err();

        assert!(err.is_storage_fault());
        assert!(store.all_steps().unwrap().is_empty());
    }

    #[test]
    fn test_import_keeps_done_hints() {
        let mut store = MemoryStore::new();
        let ids = store
            .import_steps(&[
                ParsedStep::new("Create the users table", true),
                ParsedStep::new("Add password hashing", false),
            ])
            .unwrap();

        assert_eq!(ids.len(), 2);
        let next = store.next_step().unwrap().unwrap();
        assert_eq!(next.id, ids[1]);
    }

    #[test]
    fn test_import_validates_before_writing() {
        let mut store = MemoryStore::new();
        let result = store.import_steps(&[
            ParsedStep::new("Valid step", false),
            ParsedStep::new(" ", false),
        ]);

        assert!(result.is_err());
        assert!(store.all_steps().unwrap().is_empty());
    }
}
