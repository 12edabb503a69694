//! One cycle of roadmap work.
//!
//! [`advance_roadmap`] takes the next pending step, asks the operator whether
//! to start it, runs the coding agent on it and records completion:
//!
//! ```text
//! pending ──(confirmed)──▶ running ──┬──▶ done
//!                                    └──▶ pending (agent failed)
//! ```
//!
//! Opening and closing the store is the caller's job; this module only
//! borrows it for the duration of a cycle.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::{
    agent::CodingAgent,
    error::{Result, SmeltError},
    models::Step,
    roadmap::RoadmapStore,
};

/// Asks the operator whether to start a step.
pub trait Confirm {
    /// Returns `true` to run the agent on `step`.
    fn confirm(&mut self, step: &Step) -> bool;
}

/// Confirms every step without asking.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _step: &Step) -> bool {
        true
    }
}

/// How a cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Every step is done
    NoStepsRemaining,
    /// The operator chose not to start the step
    Declined { id: u64 },
    /// The agent succeeded and the step is recorded as done
    Completed { id: u64 },
    /// The agent reported failure; the step stays pending
    AgentFailed { id: u64 },
}

impl Advance {
    /// Whether the cycle ended in a state the operator should treat as an
    /// error.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::AgentFailed { .. })
    }
}

/// Runs one cycle against `store`.
///
/// `make_agent` is only called once the operator has confirmed, so a missing
/// agent does not prevent browsing the roadmap.
///
/// # Errors
///
/// - `SmeltError::RoadmapRead` if the next step cannot be read
/// - whatever `make_agent` fails with, typically `SmeltError::AgentNotFound`
/// - `SmeltError::AgentInvocation` if the agent cannot be started
/// - `SmeltError::MarkDoneFailed` if the agent succeeded but the completion
///   could not be recorded
pub async fn advance_roadmap<S, C, A, F>(
    store: &mut S,
    prompt: &mut C,
    context_files: &[PathBuf],
    make_agent: F,
) -> Result<Advance>
where
    S: RoadmapStore + ?Sized,
    C: Confirm + ?Sized,
    A: CodingAgent,
    F: FnOnce() -> Result<A>,
{
    let step = store
        .next_step()
        .map_err(|e| SmeltError::RoadmapRead(Box::new(e)))?;

    let Some(step) = step else {
        debug!("Roadmap has no pending steps");
        return Ok(Advance::NoStepsRemaining);
    };

    if !prompt.confirm(&step) {
        debug!("Step {} declined", step.id);
        return Ok(Advance::Declined { id: step.id });
    }

    let agent = make_agent()?;
    info!("Running agent on step {}", step.id);

    if !agent.run(&step.description, context_files).await? {
        warn!("Agent failed on step {}", step.id);
        return Ok(Advance::AgentFailed { id: step.id });
    }

    store
        .mark_done(step.id)
        .map_err(|e| SmeltError::MarkDoneFailed {
            id: step.id,
            source: Box::new(e),
        })?;

    info!("Step {} marked as done", step.id);
    Ok(Advance::Completed { id: step.id })
}
