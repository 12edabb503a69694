//! Messages shown while advancing the roadmap.

use std::fmt;

use crate::{models::Step, orchestrator::Advance};

/// The step about to be offered to the operator.
pub struct NextStep<'a>(pub &'a Step);

impl fmt::Display for NextStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Next step:")?;
        writeln!(f)?;
        writeln!(f, "{}", self.0.description)
    }
}

impl fmt::Display for Advance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advance::NoStepsRemaining => writeln!(f, "No steps remaining."),
            Advance::Declined { .. } => Ok(()),
            Advance::Completed { .. } => writeln!(f, "Step completed and marked as done."),
            Advance::AgentFailed { .. } => writeln!(f, "Agent failed. Step not marked as done."),
        }
    }
}
