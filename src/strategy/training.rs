//! Training program.
//!
//! Adds a capped linear improvement to both employee satisfaction and
//! product quality. Ten or more sessions give the maximum of +10 each.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Metrics;

/// Improvement fraction per session.
pub const IMPROVEMENT_PER_SESSION: f64 = 0.1;
/// Maximum improvement fraction for a single application.
pub const MAX_IMPROVEMENT: f64 = 1.0;
/// Points added to satisfaction and quality per unit of improvement.
pub const POINTS_PER_IMPROVEMENT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingProgram {
    pub sessions: i64,
}

impl TrainingProgram {
    pub fn new(sessions: i64) -> Self {
        Self { sessions }
    }

    pub fn improvement(&self) -> f64 {
        (self.sessions as f64 * IMPROVEMENT_PER_SESSION).min(MAX_IMPROVEMENT)
    }

    pub fn apply(&self, metrics: &mut Metrics) {
        let points = self.improvement() * POINTS_PER_IMPROVEMENT;
        metrics.set_satisfaction(metrics.satisfaction() + points);
        metrics.set_quality(metrics.quality() + points);

        debug!(
            sessions = self.sessions,
            points,
            satisfaction = metrics.satisfaction(),
            quality = metrics.quality(),
            "Training program applied"
        );
    }

    pub fn description(&self) -> String {
        format!("Training Program with {} sessions", self.sessions)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
