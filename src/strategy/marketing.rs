//! Marketing campaign.
//!
//! Multiplies revenue by a boost proportional to the raw budget, capped at
//! +100%, and books the full nominal budget as expenses whether or not the
//! cap was hit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Metrics;

/// Revenue boost per unit of budget.
pub const BOOST_PER_UNIT: f64 = 0.05;
/// Maximum revenue boost for a single application (+100%).
pub const MAX_BOOST: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingCampaign {
    pub budget: i64,
}

impl MarketingCampaign {
    pub fn new(budget: i64) -> Self {
        Self { budget }
    }

    /// Fractional revenue boost for this budget. Budgets of 20 or more
    /// saturate at `MAX_BOOST`; zero and negative budgets pass through.
    pub fn boost(&self) -> f64 {
        (self.budget as f64 * BOOST_PER_UNIT).min(MAX_BOOST)
    }

    pub fn apply(&self, metrics: &mut Metrics) {
        let boost = self.boost();
        metrics.set_revenue(metrics.revenue() * (1.0 + boost));
        metrics.set_expenses(metrics.expenses() + self.budget as f64);

        debug!(
            budget = self.budget,
            boost = format!("{:.0}%", boost * 100.0),
            revenue = format!("${:.2}", metrics.revenue()),
            expenses = format!("${:.2}", metrics.expenses()),
            "Marketing campaign applied"
        );
    }

    pub fn description(&self) -> String {
        format!("Marketing Campaign with budget {}", self.budget)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
