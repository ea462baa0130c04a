//! Shared types for the company simulation.
//!
//! The metrics record is the leaf of the model: strategies mutate it and
//! the company owns exactly one. It carries no invariants of its own, so
//! negative or otherwise odd values pass through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Financial and organisational metrics of a company.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    revenue: f64,
    expenses: f64,
    employee_satisfaction: f64,
    product_quality: f64,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "revenue=${:.2} | expenses=${:.2} | profit=${:.2} ({:.1}%) | satisfaction={:.1} | quality={:.1}",
            self.revenue,
            self.expenses,
            self.profit(),
            self.margin() * 100.0,
            self.employee_satisfaction,
            self.product_quality,
        )
    }
}

impl Metrics {
    pub fn new(revenue: f64, expenses: f64, employee_satisfaction: f64, product_quality: f64) -> Self {
        Self {
            revenue,
            expenses,
            employee_satisfaction,
            product_quality,
        }
    }

    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    pub fn set_revenue(&mut self, revenue: f64) {
        self.revenue = revenue;
    }

    pub fn expenses(&self) -> f64 {
        self.expenses
    }

    pub fn set_expenses(&mut self, expenses: f64) {
        self.expenses = expenses;
    }

    pub fn satisfaction(&self) -> f64 {
        self.employee_satisfaction
    }

    pub fn set_satisfaction(&mut self, satisfaction: f64) {
        self.employee_satisfaction = satisfaction;
    }

    pub fn quality(&self) -> f64 {
        self.product_quality
    }

    pub fn set_quality(&mut self, quality: f64) {
        self.product_quality = quality;
    }

    /// Revenue minus expenses.
    pub fn profit(&self) -> f64 {
        self.revenue - self.expenses
    }

    /// Profit as a fraction of revenue. Returns 0.0 when revenue is zero.
    pub fn margin(&self) -> f64 {
        if self.revenue == 0.0 {
            0.0
        } else {
            self.profit() / self.revenue
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised at the edges of the simulation (scenario loading and
/// runner setup). Strategy application itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Unknown strategy kind: {0}")]
    UnknownStrategy(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Simulation needs at least one round, got {0}")]
    NoRounds(u32),

    #[error("Too many rounds: {requested} requested, at most {max} allowed")]
    TooManyRounds { requested: u32, max: u32 },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
