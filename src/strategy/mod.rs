//! Improvement strategies, the actions a company plan is made of.
//!
//! `Strategy` is a closed set: adding a kind means adding a variant here
//! and a module beside it.

pub mod marketing;
pub mod training;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Metrics, SimError};
pub use marketing::MarketingCampaign;
pub use training::TrainingProgram;

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// One step of an improvement plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    MarketingCampaign(MarketingCampaign),
    TrainingProgram(TrainingProgram),
}

impl Strategy {
    pub fn marketing(budget: i64) -> Self {
        Strategy::MarketingCampaign(MarketingCampaign::new(budget))
    }

    pub fn training(sessions: i64) -> Self {
        Strategy::TrainingProgram(TrainingProgram::new(sessions))
    }

    /// Apply this strategy to `metrics` in place. Never fails.
    pub fn apply(&self, metrics: &mut Metrics) {
        match self {
            Strategy::MarketingCampaign(s) => s.apply(metrics),
            Strategy::TrainingProgram(s) => s.apply(metrics),
        }
    }

    /// Human-readable description; informational only.
    pub fn description(&self) -> String {
        match self {
            Strategy::MarketingCampaign(s) => s.description(),
            Strategy::TrainingProgram(s) => s.description(),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::MarketingCampaign(_) => StrategyKind::MarketingCampaign,
            Strategy::TrainingProgram(_) => StrategyKind::TrainingProgram,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ---------------------------------------------------------------------------
// Strategy kind
// ---------------------------------------------------------------------------

/// Discriminant of `Strategy`, used when building plans from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    MarketingCampaign,
    TrainingProgram,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::MarketingCampaign => "marketing_campaign",
            StrategyKind::TrainingProgram => "training_program",
        }
    }

    /// Build a strategy of this kind from its single numeric parameter
    /// (budget or sessions).
    pub fn with_param(self, param: i64) -> Strategy {
        match self {
            StrategyKind::MarketingCampaign => Strategy::marketing(param),
            StrategyKind::TrainingProgram => Strategy::training(param),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-insensitive; accepts short aliases.
impl std::str::FromStr for StrategyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "marketing_campaign" | "marketing" => Ok(StrategyKind::MarketingCampaign),
            "training_program" | "training" => Ok(StrategyKind::TrainingProgram),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
