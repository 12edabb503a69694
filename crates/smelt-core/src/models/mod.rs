//! Data models for roadmap steps.
//!
//! This module contains the domain models of the smelt roadmap. Display
//! implementations for these models live in [`crate::display::models`] to keep
//! data structures separate from presentation.
//!
//! - [`Step`]: a persisted unit of roadmap work, owned by a
//!   [`RoadmapStore`](crate::roadmap::RoadmapStore)
//! - [`ParsedStep`]: a transient step produced by the
//!   [`PlanParser`](crate::plan_parser::PlanParser) before import
//! - [`RoadmapSummary`]: completion counts for a list of steps
//!
//! # Examples
//!
//! ```rust
//! use smelt_core::models::{RoadmapSummary, Step};
//!
//! let steps = vec![
//!     Step { id: 1, description: "Add login page".to_string(), done: true },
//!     Step { id: 2, description: "Add dashboard".to_string(), done: false },
//! ];
//!
//! let summary = RoadmapSummary::from(steps.as_slice());
//! assert_eq!(summary.to_string(), "1/2 done");
//! ```

pub mod parsed;
pub mod step;
pub mod summary;

pub use parsed::ParsedStep;
pub use step::Step;
pub use summary::RoadmapSummary;
