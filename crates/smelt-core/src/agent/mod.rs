//! Coding agents that carry out roadmap steps.
//!
//! An agent receives the step description as its task message plus a list of
//! read-only context files, works on the project, and reports whether it
//! succeeded. Smelt never inspects what the agent changed.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

pub mod aider;

pub use aider::AiderAgent;

/// An external code-generation agent.
#[async_trait]
pub trait CodingAgent: Send + Sync {
    /// Runs the agent on `message`, exposing `context_files` read-only.
    ///
    /// Returns `Ok(true)` on success and `Ok(false)` when the agent ran but
    /// reported failure.
    ///
    /// # Errors
    ///
    /// Returns `SmeltError::AgentInvocation` if the agent could not be
    /// started at all.
    async fn run(&self, message: &str, context_files: &[PathBuf]) -> Result<bool>;
}
