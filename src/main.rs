//! company-sim entry point.
//!
//! Loads a scenario, initialises structured logging, builds the company
//! and runs its improvement plan for the configured number of rounds.

use anyhow::{Context, Result};
use tracing::info;

use company_sim::config::ScenarioConfig;
use company_sim::engine::{SimulationReport, SimulationRunner};

const DEFAULT_SCENARIO: &str = "scenario.toml";

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    // First CLI argument wins over the environment
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("COMPANY_SIM_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_SCENARIO.to_string());

    let cfg = ScenarioConfig::load(&path)?;
    info!(
        path = %path,
        company = cfg.company.name.as_deref().unwrap_or("-"),
        rounds = cfg.run.rounds,
        strategies = cfg.plan.len(),
        "Scenario loaded"
    );

    let mut company = cfg.build_company()?;
    let runner = SimulationRunner::new(cfg.run.rounds)?;
    let report = runner.run(&mut company);

    print_report(&report)?;
    Ok(())
}

/// Print the report as text, or as pretty JSON when
/// `COMPANY_SIM_REPORT_JSON` is set.
fn print_report(report: &SimulationReport) -> Result<()> {
    if std::env::var("COMPANY_SIM_REPORT_JSON").is_ok() {
        let json = serde_json::to_string_pretty(report)
            .context("Failed to serialise simulation report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("company_sim=info"));

    let json_logging = std::env::var("COMPANY_SIM_LOG_JSON").is_ok();

    // Logs go to stderr so stdout carries only the report
    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
