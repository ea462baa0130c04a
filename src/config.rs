//! Scenario loading from TOML.
//!
//! A scenario describes one company (initial metrics), its improvement
//! plan, and how many rounds to run. Plan entries are kept loosely typed on
//! disk (`kind` plus an optional `budget`/`sessions`) and turned into
//! `Strategy` values by `build_plan`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::engine::company::Company;
use crate::strategy::{Strategy, StrategyKind};
use crate::types::{Metrics, SimError};

/// Top-level scenario configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub company: CompanyConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub plan: Vec<PlanEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompanyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub revenue: f64,
    pub expenses: f64,
    pub employee_satisfaction: f64,
    pub product_quality: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RunConfig {
    pub rounds: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { rounds: 1 }
    }
}

/// One `[[plan]]` table.
#[derive(Debug, Deserialize, Clone)]
pub struct PlanEntry {
    pub kind: String,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub sessions: Option<i64>,
}

impl PlanEntry {
    pub fn to_strategy(&self) -> Result<Strategy, SimError> {
        let kind: StrategyKind = self.kind.parse()?;
        let (param, field) = match kind {
            StrategyKind::MarketingCampaign => (self.budget, "budget"),
            StrategyKind::TrainingProgram => (self.sessions, "sessions"),
        };
        let param = param.ok_or_else(|| {
            SimError::InvalidScenario(format!("{kind} entry is missing `{field}`"))
        })?;
        Ok(kind.with_param(param))
    }
}

impl ScenarioConfig {
    /// Load a scenario from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {path}"))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse scenario file: {path}"))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: ScenarioConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks only. Metric values and strategy parameters are
    /// never range-checked; the round count is checked by
    /// `SimulationRunner::new`.
    pub fn validate(&self) -> Result<(), SimError> {
        if let Some(name) = &self.company.name {
            if name.trim().is_empty() {
                return Err(SimError::InvalidScenario("company name is empty".into()));
            }
        }
        self.build_plan()?;
        Ok(())
    }

    pub fn initial_metrics(&self) -> Metrics {
        Metrics::new(
            self.company.revenue,
            self.company.expenses,
            self.company.employee_satisfaction,
            self.company.product_quality,
        )
    }

    pub fn build_plan(&self) -> Result<Vec<Strategy>, SimError> {
        self.plan.iter().map(PlanEntry::to_strategy).collect()
    }

    pub fn build_company(&self) -> Result<Company, SimError> {
        let company = Company::new(self.initial_metrics(), self.build_plan()?);
        Ok(match &self.company.name {
            Some(name) => company.with_name(name.clone()),
            None => company,
        })
    }
}
