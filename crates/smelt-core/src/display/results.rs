//! Result wrapper types for displaying command outcomes.
//!
//! Every mutating command prints exactly one confirmation line built from one
//! of these wrappers.

use std::fmt;

use crate::models::{ParsedStep, Step};

/// Confirmation for a newly added step.
///
/// # Examples
///
/// ```rust
/// use smelt_core::{display::CreateResult, models::Step};
///
/// let step = Step { id: 7, description: "Implement login".to_string(), done: false };
/// assert_eq!(CreateResult::new(step).to_string(), "Added step 7: Implement login\n");
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Step> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added step {}: {}",
            self.resource.id, self.resource.description
        )
    }
}

/// Confirmation for a change of a step's completion flag.
pub struct UpdateResult {
    pub id: u64,
    pub done: bool,
}

impl UpdateResult {
    /// The step was marked as done.
    pub fn done(id: u64) -> Self {
        Self { id, done: true }
    }

    /// The step was reopened.
    pub fn reopened(id: u64) -> Self {
        Self { id, done: false }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.done {
            writeln!(f, "Marked step {} as done.", self.id)
        } else {
            writeln!(f, "Reopened step {}.", self.id)
        }
    }
}

/// Confirmation for a removed step.
pub struct DeleteResult {
    pub id: u64,
}

impl DeleteResult {
    /// Create a new DeleteResult wrapper.
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Removed step {}.", self.id)
    }
}

/// Summary of a plan import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
    pub already_done: usize,
}

impl From<&[ParsedStep]> for ImportResult {
    fn from(steps: &[ParsedStep]) -> Self {
        Self {
            imported: steps.len(),
            already_done: steps.iter().filter(|step| step.done).count(),
        }
    }
}

impl fmt::Display for ImportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} steps ({} already done).",
            self.imported, self.already_done
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_result_messages() {
        assert_eq!(UpdateResult::done(2).to_string(), "Marked step 2 as done.\n");
        assert_eq!(UpdateResult::reopened(2).to_string(), "Reopened step 2.\n");
    }

    #[test]
    fn test_delete_result_message() {
        assert_eq!(DeleteResult::new(5).to_string(), "Removed step 5.\n");
    }

    #[test]
    fn test_import_result_counts_done_hints() {
        let parsed = vec![
            ParsedStep::new("Create the users table", true),
            ParsedStep::new("Add password hashing", false),
            ParsedStep::new("Add login form", false),
        ];

        let result = ImportResult::from(parsed.as_slice());

        assert_eq!(result.imported, 3);
        assert_eq!(result.already_done, 1);
        assert_eq!(result.to_string(), "Imported 3 steps (1 already done).\n");
    }
}
