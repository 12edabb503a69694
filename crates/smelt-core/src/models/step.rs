//! Step model definition.

use serde::{Deserialize, Serialize};

/// A single unit of roadmap work.
///
/// Steps are ordered by `id`: the store assigns ids monotonically, so the
/// pending step with the smallest id is always the next one to work on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Unique identifier assigned by the store, never reused
    pub id: u64,

    /// What needs to be done, never empty
    pub description: String,

    /// Whether the step has been completed
    pub done: bool,
}

impl Step {
    /// Whether the step still needs work.
    pub fn is_pending(&self) -> bool {
        !self.done
    }
}
