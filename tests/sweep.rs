//! Tests of the parallel abatement sweep.

use approx::assert_relative_eq;
use dice::{
    AbatementGrid, CancellationToken, DiceError, ScenarioConfig, ScenarioSweep, SweepConfig,
};
use std::sync::atomic::{AtomicUsize, Ordering};

fn base_config() -> ScenarioConfig {
    ScenarioConfig {
        number_of_times: 30,
        ..Default::default()
    }
}

fn sweep_config(start: f64, end: f64, step: f64, threads: Option<usize>) -> SweepConfig {
    SweepConfig {
        grid: AbatementGrid { start, end, step },
        abatement_initial: 0.03,
        threads,
    }
}

#[test]
fn test_output_preserves_grid_order() {
    let sweep = ScenarioSweep::new(base_config(), sweep_config(0.0, 3.0, 0.05, Some(4))).unwrap();
    let result = sweep.run(&CancellationToken::new()).unwrap();

    assert!(!result.cancelled);
    assert_eq!(result.points.len(), sweep.grid_values().len());
    for (point, &expected) in result.points.iter().zip(sweep.grid_values()) {
        assert_eq!(point.abatement_increase, expected);
    }
}

#[test]
fn test_parallel_matches_independent_runs() {
    let sweep = ScenarioSweep::new(base_config(), sweep_config(0.0, 2.0, 0.25, None)).unwrap();
    let result = sweep.run(&CancellationToken::new()).unwrap();

    for point in &result.points {
        let expected = sweep.run_scenario(point.abatement_increase).unwrap();
        assert_eq!(*point.objective.as_ref().unwrap(), expected);
    }
}

#[test]
fn test_thread_count_does_not_change_results() {
    let single = ScenarioSweep::new(base_config(), sweep_config(0.0, 1.0, 0.1, Some(1)))
        .unwrap()
        .run(&CancellationToken::new())
        .unwrap();
    let many = ScenarioSweep::new(base_config(), sweep_config(0.0, 1.0, 0.1, Some(8)))
        .unwrap()
        .run(&CancellationToken::new())
        .unwrap();

    assert_eq!(single.successes(), many.successes());
}

#[test]
fn test_more_abatement_costs_more_in_the_short_run() {
    let sweep = ScenarioSweep::new(base_config(), sweep_config(0.0, 1.0, 0.5, None)).unwrap();
    let objectives = sweep.run(&CancellationToken::new()).unwrap().successes();

    assert_eq!(objectives.len(), 3);
    // Over a short horizon the avoided damage cannot offset the abatement cost
    assert!(objectives[0].1 > objectives[1].1);
    assert!(objectives[1].1 > objectives[2].1);
}

#[test]
fn test_failures_are_scoped_to_their_scenario() {
    // Negative increases drive abatement below zero, which is an invalid configuration
    let sweep = ScenarioSweep::new(base_config(), sweep_config(-1.0, 1.0, 0.5, None)).unwrap();
    let result = sweep.run(&CancellationToken::new()).unwrap();

    assert_eq!(result.points.len(), 5);
    assert_eq!(result.failures().count(), 2);
    for point in &result.points[..2] {
        assert!(matches!(
            point.objective,
            Err(DiceError::InvalidConfiguration(_))
        ));
    }
    for point in &result.points[2..] {
        assert!(point.objective.is_ok());
    }

    let (best_increase, best_objective) = result.best().unwrap();
    assert_eq!(best_increase, 0.0);
    assert_relative_eq!(
        best_objective,
        sweep.run_scenario(0.0).unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn test_cancelled_before_start() {
    let sweep = ScenarioSweep::new(base_config(), sweep_config(0.0, 1.0, 0.1, None)).unwrap();
    let token = CancellationToken::new();
    token.cancel();

    let result = sweep.run(&token).unwrap();
    assert!(result.cancelled);
    assert!(result.points.is_empty());
    assert!(result.best().is_none());
}

#[test]
fn test_cancel_during_sweep_keeps_completed_points() {
    let sweep = ScenarioSweep::new(base_config(), sweep_config(0.0, 5.0, 0.05, Some(1))).unwrap();
    let token = CancellationToken::new();
    let completed = AtomicUsize::new(0);

    let result = sweep
        .run_with_progress(&token, |_| {
            if completed.fetch_add(1, Ordering::SeqCst) + 1 == 3 {
                token.cancel();
            }
        })
        .unwrap();

    assert!(result.cancelled);
    assert!(result.points.len() >= 3);
    assert!(result.points.len() < sweep.grid_values().len());
    assert!(result
        .points
        .windows(2)
        .all(|w| w[0].abatement_increase < w[1].abatement_increase));
    for point in &result.points {
        assert_eq!(
            *point.objective.as_ref().unwrap(),
            sweep.run_scenario(point.abatement_increase).unwrap()
        );
    }
}
