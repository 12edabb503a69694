//! Roadmap storage interface.
//!
//! A roadmap is an ordered list of [`Step`]s. Every backend implements
//! [`RoadmapStore`]; the orchestrator and the CLI only ever talk to the trait.
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │ Orchestrator │────▶│   RoadmapStore    │◀────│ Database (SQLite)│
//! │  CLI, import │     │  (this module)    │◀────│ MemoryStore      │
//! └──────────────┘     └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Ordering
//!
//! Ids are assigned in ascending order and never reused. "Next" always means
//! the pending step with the smallest id.
//!
//! # Lifecycle
//!
//! A store holds a handle from construction until [`RoadmapStore::close`].
//! Callers close explicitly so that errors on release are reported; dropping
//! a store without closing still releases the handle.
//!
//! # Examples
//!
//! ```rust
//! use smelt_core::roadmap::{MemoryStore, RoadmapStore};
//!
//! # fn example() -> smelt_core::Result<()> {
//! let mut store = MemoryStore::new();
//! let first = store.add_step("Create the users table")?;
//! store.add_step("Add password hashing")?;
//!
//! store.mark_done(first)?;
//! let next = store.next_step()?.expect("one step left");
//! assert_eq!(next.description, "Add password hashing");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod memory;

pub use memory::MemoryStore;

use crate::{
    error::{Result, SmeltError},
    models::{ParsedStep, Step},
};

/// Storage backend for roadmap steps.
pub trait RoadmapStore {
    /// Appends a pending step and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `SmeltError::InvalidInput` for an empty or whitespace-only
    /// description, or a storage error if the write fails.
    fn add_step(&mut self, description: &str) -> Result<u64>;

    /// Returns the pending step with the smallest id, if any.
    fn next_step(&self) -> Result<Option<Step>>;

    /// Sets `done` on a step. Marking an already completed step is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `SmeltError::StepNotFound` if no step has this id.
    fn mark_done(&mut self, id: u64) -> Result<()>;

    /// Clears `done` on a step.
    ///
    /// # Errors
    ///
    /// Returns `SmeltError::StepNotFound` if no step has this id.
    fn reset_step(&mut self, id: u64) -> Result<()>;

    /// Deletes a step permanently.
    ///
    /// # Errors
    ///
    /// Returns `SmeltError::StepNotFound` if no step has this id.
    fn remove_step(&mut self, id: u64) -> Result<()>;

    /// Returns every step in ascending id order.
    fn all_steps(&self) -> Result<Vec<Step>>;

    /// Appends parsed steps in order, keeping their completion hints.
    ///
    /// Backends that support transactions override this so that an import
    /// either lands completely or not at all.
    fn import_steps(&mut self, steps: &[ParsedStep]) -> Result<Vec<u64>> {
        for step in steps {
            validate_description(&step.description)?;
        }

        let mut ids = Vec::with_capacity(steps.len());
        for step in steps {
            let id = self.add_step(&step.description)?;
            if step.done {
                self.mark_done(id)?;
            }
            ids.push(id);
        }
        Ok(ids)
    }

    /// Releases the underlying handle.
    fn close(self: Box<Self>) -> Result<()>;
}

/// Rejects descriptions that are empty once surrounding whitespace is
/// ignored.
pub(crate) fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(SmeltError::invalid_input(
            "description",
            "Step description cannot be empty",
        ));
    }
    Ok(())
}
