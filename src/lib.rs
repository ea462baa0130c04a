//! company-sim: a company whose metrics are driven by an improvement plan.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod strategy;
pub mod engine;

pub use engine::{Company, SimulationReport, SimulationRunner};
pub use strategy::{MarketingCampaign, Strategy, StrategyKind, TrainingProgram};
pub use types::{Metrics, SimError};
