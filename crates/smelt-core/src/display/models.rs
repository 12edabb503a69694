//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so that data structures stay free of
//! presentation concerns.

use std::fmt;

use crate::models::{ParsedStep, RoadmapSummary, Step};

/// Checkbox marker used everywhere a completion flag is shown.
fn marker(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", marker(self.done), self.description)
    }
}

impl fmt::Display for ParsedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", marker(self.done), self.description)
    }
}

impl fmt::Display for RoadmapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} done", self.completed_steps, self.total_steps)
    }
}
