//! Roadmap progress summary.

use serde::{Deserialize, Serialize};

use super::Step;

/// Completion counts over a set of steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RoadmapSummary {
    /// Total number of steps
    pub total_steps: u32,
    /// Number of completed steps
    pub completed_steps: u32,
    /// Number of pending steps
    pub pending_steps: u32,
}

impl From<&[Step]> for RoadmapSummary {
    fn from(steps: &[Step]) -> Self {
        let total_steps = steps.len() as u32;
        let completed_steps = steps.iter().filter(|step| step.done).count() as u32;

        Self {
            total_steps,
            completed_steps,
            pending_steps: total_steps - completed_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: u64, done: bool) -> Step {
        Step {
            id,
            description: format!("Step {id}"),
            done,
        }
    }

    #[test]
    fn test_summary_counts() {
        let steps = vec![step(1, true), step(2, false), step(3, false)];
        let summary = RoadmapSummary::from(steps.as_slice());

        assert_eq!(summary.total_steps, 3);
        assert_eq!(summary.completed_steps, 1);
        assert_eq!(summary.pending_steps, 2);
    }

    #[test]
    fn test_summary_of_empty_roadmap() {
        let summary = RoadmapSummary::from(&[][..]);
        assert_eq!(summary, RoadmapSummary::default());
    }
}
