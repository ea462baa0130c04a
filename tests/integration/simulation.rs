//! End-to-end company simulations.
//!
//! Replays the reference scenarios through the public API only: build a
//! company, execute its plan, check the resulting metrics.

use company_sim::{Company, Metrics, SimulationRunner, Strategy};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn reference_company(plan: Vec<Strategy>) -> Company {
    Company::from_values(50000.0, 20000.0, 70.0, 80.0, plan)
}

#[test]
fn test_max_effect_scenario() {
    let mut c = reference_company(vec![Strategy::marketing(100_000), Strategy::training(20)]);
    c.execute();

    assert_eq!(*c.metrics(), Metrics::new(100000.0, 120000.0, 80.0, 90.0));
}

#[test]
fn test_small_plan_scenario() {
    let mut c = reference_company(vec![Strategy::marketing(1000), Strategy::training(5)]);
    c.execute();

    assert_eq!(c.expenses(), 21000.0);
    assert_eq!(c.satisfaction(), 75.0);
    assert_eq!(c.quality(), 85.0);
    // 1000 * 0.05 is far past the +100% cap
    assert_eq!(c.revenue(), 100000.0);
}

#[test]
fn test_uncapped_budget_scenario() {
    let mut c = reference_company(vec![Strategy::marketing(1), Strategy::training(5)]);
    c.execute();

    assert!(approx(c.revenue(), 52500.0));
    assert_eq!(c.expenses(), 20001.0);
    assert_eq!(c.satisfaction(), 75.0);
    assert_eq!(c.quality(), 85.0);
}

#[test]
fn test_every_budget_below_cap_is_linear() {
    for budget in 0..20 {
        let mut c = reference_company(vec![Strategy::marketing(budget)]);
        c.execute();
        let expected = 50000.0 * (1.0 + 0.05 * budget as f64);
        assert!(approx(c.revenue(), expected), "budget {budget}");
        assert_eq!(c.expenses(), 20000.0 + budget as f64, "budget {budget}");
    }
}

#[test]
fn test_every_session_count_below_cap_is_linear() {
    for sessions in 0..10 {
        let mut c = reference_company(vec![Strategy::training(sessions)]);
        c.execute();
        assert!(approx(c.satisfaction(), 70.0 + sessions as f64), "sessions {sessions}");
        assert!(approx(c.quality(), 80.0 + sessions as f64), "sessions {sessions}");
        assert_eq!(c.revenue(), 50000.0);
    }
}

#[test]
fn test_cap_applies_per_execution() {
    let mut c = reference_company(vec![Strategy::marketing(20), Strategy::training(10)]);
    c.execute();
    c.execute();

    assert_eq!(c.revenue(), 200000.0);
    assert_eq!(c.expenses(), 20040.0);
    assert_eq!(c.satisfaction(), 90.0);
    assert_eq!(c.quality(), 100.0);
}

#[test]
fn test_empty_plan_is_noop_for_any_values() {
    for initial in [
        Metrics::new(10000.0, 5000.0, 60.0, 70.0),
        Metrics::new(-50000.0, -20000.0, -10.0, -5.0),
        Metrics::default(),
    ] {
        let mut c = Company::new(initial, Vec::new());
        c.execute();
        assert_eq!(*c.metrics(), initial);
    }
}

#[test]
fn test_negative_inputs_flow_through() {
    let mut c = Company::from_values(
        -50000.0,
        -20000.0,
        -10.0,
        -5.0,
        vec![Strategy::marketing(100), Strategy::training(2)],
    );
    c.execute();

    assert_eq!(c.revenue(), -100000.0);
    assert_eq!(c.expenses(), -19900.0);
    assert!(approx(c.satisfaction(), -8.0));
    assert!(approx(c.quality(), -3.0));
}

#[test]
fn test_runner_matches_manual_execution() {
    let plan = vec![Strategy::marketing(7), Strategy::training(4)];

    let mut manual = reference_company(plan.clone());
    for _ in 0..4 {
        manual.execute();
    }

    let mut driven = reference_company(plan);
    let report = SimulationRunner::new(4).unwrap().run(&mut driven);

    assert_eq!(report.final_metrics, *manual.metrics());
    assert_eq!(driven.executions(), manual.executions());
}
