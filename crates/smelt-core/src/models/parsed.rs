//! Steps extracted from a free-form plan document.

use serde::{Deserialize, Serialize};

/// A step produced by the plan parser, not yet persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedStep {
    /// Trimmed, non-empty description
    pub description: String,

    /// Completion hint inferred from the source document
    pub done: bool,
}

impl ParsedStep {
    /// Create a parsed step.
    pub fn new(description: impl Into<String>, done: bool) -> Self {
        Self {
            description: description.into(),
            done,
        }
    }
}
