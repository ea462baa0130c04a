//! Scenario files on disk, from TOML through to a finished run.

use std::path::PathBuf;

use company_sim::config::ScenarioConfig;
use company_sim::{Metrics, SimError, SimulationRunner, Strategy};

fn temp_path() -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("company_sim_scenario_{}.toml", uuid::Uuid::new_v4()));
    p
}

#[test]
fn test_shipped_scenario_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenario.toml");
    let cfg = ScenarioConfig::load(path).unwrap();

    assert_eq!(cfg.company.name.as_deref(), Some("Acme"));
    assert_eq!(cfg.run.rounds, 3);
    assert_eq!(
        cfg.build_plan().unwrap(),
        vec![Strategy::marketing(1000), Strategy::training(5)]
    );
}

#[test]
fn test_load_and_run_from_disk() {
    let path = temp_path();
    std::fs::write(
        &path,
        r#"
[company]
name = "Initech"
revenue = 50000.0
expenses = 20000.0
employee_satisfaction = 70.0
product_quality = 80.0

[run]
rounds = 1

[[plan]]
kind = "marketing_campaign"
budget = 100000

[[plan]]
kind = "training_program"
sessions = 20
"#,
    )
    .unwrap();

    let cfg = ScenarioConfig::load(path.to_str().unwrap()).unwrap();
    let mut company = cfg.build_company().unwrap();
    let report = SimulationRunner::new(cfg.run.rounds).unwrap().run(&mut company);

    assert_eq!(report.company.as_deref(), Some("Initech"));
    assert_eq!(report.final_metrics, Metrics::new(100000.0, 120000.0, 80.0, 90.0));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_malformed_file_reports_path() {
    let path = temp_path();
    std::fs::write(&path, "[company\nrevenue = ").unwrap();

    let err = ScenarioConfig::load(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse scenario file"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_oversized_round_count_is_an_error() {
    let path = temp_path();
    std::fs::write(
        &path,
        r#"
[company]
revenue = 50000.0
expenses = 20000.0
employee_satisfaction = 70.0
product_quality = 80.0

[run]
rounds = 4000000000

[[plan]]
kind = "marketing_campaign"
budget = 100
"#,
    )
    .unwrap();

    let cfg = ScenarioConfig::load(path.to_str().unwrap()).unwrap();
    assert!(cfg.build_company().is_ok());

    let err = SimulationRunner::new(cfg.run.rounds).err().unwrap();
    assert!(matches!(
        err,
        SimError::TooManyRounds { requested: 4_000_000_000, .. }
    ));

    std::fs::remove_file(&path).unwrap();
}
