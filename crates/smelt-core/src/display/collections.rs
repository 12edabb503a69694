//! Collection wrapper types for displaying groups of steps.

use std::{fmt, ops::Index};

use crate::models::{RoadmapSummary, Step};

/// Newtype wrapper for displaying a roadmap listing.
///
/// Each step is shown as `<id>. [x] description`, followed by a blank line and
/// the completion summary. Empty roadmaps get a short notice instead.
///
/// # Examples
///
/// ```rust
/// use smelt_core::{display::Steps, models::Step};
///
/// let steps = Steps(vec![Step {
///     id: 1,
///     description: "Implement login".to_string(),
///     done: false,
/// }]);
/// assert_eq!(steps.to_string(), "1. [ ] Implement login\n\n0/1 done\n");
/// ```
pub struct Steps(pub Vec<Step>);

impl Steps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    /// Completion counts for the listed steps.
    pub fn summary(&self) -> RoadmapSummary {
        RoadmapSummary::from(self.0.as_slice())
    }
}

impl Index<usize> for Steps {
    type Output = Step;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Steps {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Steps {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No steps in the roadmap.");
        }

        for step in &self.0 {
            writeln!(f, "{}. {}", step.id, step)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.summary())
    }
}
