//! Company: owns the metrics record and the improvement plan, and applies
//! the plan on demand.
//!
//! `Company` does not implement `Clone`: it is the single owner
//! of its plan and record, and duplicating it has to be done explicitly.

use tracing::debug;

use crate::strategy::Strategy;
use crate::types::Metrics;

pub struct Company {
    name: Option<String>,
    metrics: Metrics,
    plan: Vec<Strategy>,
    executions: u64,
}

impl Company {
    pub fn new(metrics: Metrics, plan: Vec<Strategy>) -> Self {
        Self {
            name: None,
            metrics,
            plan,
            executions: 0,
        }
    }

    /// Build from the four raw metric values, in the order revenue,
    /// expenses, satisfaction, quality.
    pub fn from_values(
        revenue: f64,
        expenses: f64,
        satisfaction: f64,
        quality: f64,
        plan: Vec<Strategy>,
    ) -> Self {
        Self::new(Metrics::new(revenue, expenses, satisfaction, quality), plan)
    }

    /// Attach a label used in logs and reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }

    pub fn plan(&self) -> &[Strategy] {
        &self.plan
    }

    /// Number of completed `execute` passes.
    pub fn executions(&self) -> u64 {
        self.executions
    }

    pub fn revenue(&self) -> f64 {
        self.metrics.revenue()
    }

    pub fn set_revenue(&mut self, revenue: f64) {
        self.metrics.set_revenue(revenue);
    }

    pub fn expenses(&self) -> f64 {
        self.metrics.expenses()
    }

    pub fn set_expenses(&mut self, expenses: f64) {
        self.metrics.set_expenses(expenses);
    }

    pub fn satisfaction(&self) -> f64 {
        self.metrics.satisfaction()
    }

    pub fn set_satisfaction(&mut self, satisfaction: f64) {
        self.metrics.set_satisfaction(satisfaction);
    }

    pub fn quality(&self) -> f64 {
        self.metrics.quality()
    }

    pub fn set_quality(&mut self, quality: f64) {
        self.metrics.set_quality(quality);
    }

    /// Apply every strategy of the plan, in order, to the owned metrics.
    ///
    /// Each call is a full pass; caps are evaluated per strategy per call,
    /// so repeated calls compound.
    pub fn execute(&mut self) {
        for (step, strategy) in self.plan.iter().enumerate() {
            debug!(
                company = self.name.as_deref().unwrap_or("-"),
                step,
                kind = %strategy.kind(),
                strategy = %strategy,
                "Applying strategy"
            );
            strategy.apply(&mut self.metrics);
        }
        self.executions += 1;

        debug!(
            company = self.name.as_deref().unwrap_or("-"),
            pass = self.executions,
            strategies = self.plan.len(),
            metrics = %self.metrics,
            "Plan executed"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
