//! Simulation runner: repeated plan execution with per-round bookkeeping.
//!
//! Wraps `Company::execute` so a scenario can run several rounds and report
//! how each round moved the metrics.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::info;
use uuid::Uuid;

use crate::engine::company::Company;
use crate::types::{Metrics, SimError};

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Metrics before and after a single `execute` pass.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub round: u32,
    pub before: Metrics,
    pub after: Metrics,
}

impl RoundReport {
    pub fn profit_delta(&self) -> f64 {
        self.after.profit() - self.before.profit()
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Round #{}: {} (profit {:+.2})",
            self.round,
            self.after,
            self.profit_delta(),
        )
    }
}

/// Outcome of a full simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub run_id: Uuid,
    pub company: Option<String>,
    pub strategies: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub initial: Metrics,
    pub final_metrics: Metrics,
    pub rounds: Vec<RoundReport>,
}

impl SimulationReport {
    /// Total profit change over the whole run.
    pub fn profit_change(&self) -> f64 {
        self.final_metrics.profit() - self.initial.profit()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Simulation {} ({})",
            self.run_id,
            self.company.as_deref().unwrap_or("unnamed company"),
        )?;
        if self.strategies.is_empty() {
            writeln!(f, "Plan: (empty)")?;
        } else {
            writeln!(f, "Plan: {}", self.strategies.join(", "))?;
        }
        writeln!(f, "Initial: {}", self.initial)?;
        for round in &self.rounds {
            writeln!(f, "{round}")?;
        }
        write!(
            f,
            "Final:   {} (profit change {:+.2})",
            self.final_metrics,
            self.profit_change(),
        )
    }
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Upper bound on rounds per run. Every round is kept in the report.
pub const MAX_ROUNDS: u32 = 10_000;

pub struct SimulationRunner {
    rounds: u32,
}

impl SimulationRunner {
    /// A runner needs between one and `MAX_ROUNDS` rounds.
    pub fn new(rounds: u32) -> Result<Self, SimError> {
        if rounds == 0 {
            return Err(SimError::NoRounds(rounds));
        }
        if rounds > MAX_ROUNDS {
            return Err(SimError::TooManyRounds {
                requested: rounds,
                max: MAX_ROUNDS,
            });
        }
        Ok(Self { rounds })
    }

    /// Execute the company's plan `rounds` times, recording each pass.
    pub fn run(&self, company: &mut Company) -> SimulationReport {
        let started_at = Utc::now();
        let run_id = Uuid::new_v4();
        let initial = *company.metrics();

        info!(
            run_id = %run_id,
            company = company.name().unwrap_or("-"),
            rounds = self.rounds,
            strategies = company.plan().len(),
            "Simulation starting"
        );

        let mut rounds = Vec::new();
        for round in 1..=self.rounds {
            let before = *company.metrics();
            company.execute();
            let report = RoundReport {
                round,
                before,
                after: *company.metrics(),
            };
            info!(
                round,
                revenue = format!("${:.2}", report.after.revenue()),
                expenses = format!("${:.2}", report.after.expenses()),
                satisfaction = report.after.satisfaction(),
                quality = report.after.quality(),
                "Round complete"
            );
            rounds.push(report);
        }

        let report = SimulationReport {
            run_id,
            company: company.name().map(str::to_string),
            strategies: company.plan().iter().map(|s| s.description()).collect(),
            started_at,
            finished_at: Utc::now(),
            initial,
            final_metrics: *company.metrics(),
            rounds,
        };

        info!(
            run_id = %run_id,
            profit_change = format!("${:.2}", report.profit_change()),
            "Simulation complete"
        );

        report
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
