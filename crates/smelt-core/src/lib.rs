//! Core library for smelt, a roadmap-driven coding agent orchestrator.
//!
//! Smelt keeps an ordered roadmap of development steps and feeds them, one at
//! a time, to an external coding agent. This crate holds everything except
//! the command line: storage, plan import, agent invocation and the
//! orchestration cycle.
//!
//! ```text
//! plan file ──▶ PlanParser ──▶ RoadmapStore ──▶ advance_roadmap ──▶ CodingAgent
//!                 (llm)        (db, memory)      (orchestrator)       (agent)
//! ```
//!
//! # Display Architecture
//!
//! Domain models implement [`std::fmt::Display`] directly, and the
//! [`display`] module adds wrappers for listings and command results. The CLI
//! renders the formatted text through its terminal renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use smelt_core::{display::Steps, Database, RoadmapStore};
//!
//! # fn example() -> smelt_core::Result<()> {
//! let mut roadmap = Database::in_memory()?;
//! let id = roadmap.add_step("Implement login")?;
//! roadmap.add_step("Add logout")?;
//! roadmap.mark_done(id)?;
//!
//! let listing = Steps(roadmap.all_steps()?);
//! assert!(listing.to_string().ends_with("1/2 done\n"));
//! roadmap.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod agent;
pub mod config;
pub mod context;
pub mod db;
pub mod display;
pub mod error;
pub mod llm;
pub mod models;
pub mod orchestrator;
pub mod plan_parser;
pub mod roadmap;

// Re-export commonly used types
pub use agent::{AiderAgent, CodingAgent};
pub use config::Settings;
pub use db::Database;
pub use display::{CreateResult, DeleteResult, ImportResult, NextStep, Steps, UpdateResult};
pub use error::{PlanParseError, Result, SmeltError};
pub use llm::{CompletionProvider, HttpCompletionProvider};
pub use models::{ParsedStep, RoadmapSummary, Step};
pub use orchestrator::{advance_roadmap, Advance, AssumeYes, Confirm};
pub use plan_parser::PlanParser;
pub use roadmap::{MemoryStore, RoadmapStore};
