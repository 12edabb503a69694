//! Display formatting for roadmap output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and command outcomes are formatted through small wrapper types
//! so the same data can be shown differently depending on context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper & Result│    │   Formatted     │
//! │  (Step, ...)    │───▶│      Types      │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: the [`Steps`] listing used by `smelt status`
//! - [`results`]: add, done/reset, remove and import confirmations
//! - [`status`]: outcomes of a `smelt next` cycle
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use smelt_core::{display::Steps, models::Step};
//!
//! let steps = Steps(vec![
//!     Step { id: 1, description: "Set up database".to_string(), done: true },
//!     Step { id: 2, description: "Add login".to_string(), done: false },
//! ]);
//!
//! let output = steps.to_string();
//! assert!(output.contains("1. [x] Set up database"));
//! assert!(output.contains("2. [ ] Add login"));
//! assert!(output.ends_with("1/2 done\n"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Steps;
pub use results::{CreateResult, DeleteResult, ImportResult, UpdateResult};
pub use status::NextStep;
