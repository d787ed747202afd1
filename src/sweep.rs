//! Scenario sweep
//!
//! Explores the trade-off between abatement cost and climate damage by running
//! one independent scenario per point of an abatement-increase grid.
//!
//! Scenarios share only the immutable base configuration and are evaluated in
//! parallel via rayon. The output preserves the grid order. A failing scenario
//! is recorded against its grid point and does not affect its siblings.

use crate::config::ScenarioConfig;
use crate::simulation::Simulation;
use dice_core::errors::{DiceError, DiceResult};
use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Upper bound on the number of points in an [`AbatementGrid`].
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Grid of abatement increases, `start, start + step, ..., end` (inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbatementGrid {
    /// Default: 0.0
    pub start: f64,
    /// Default: 50.0
    pub end: f64,
    /// Default: 0.05
    pub step: f64,
}

impl Default for AbatementGrid {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 50.0,
            step: 0.05,
        }
    }
}

impl AbatementGrid {
    /// The grid points in ascending order.
    ///
    /// Points are computed as `start + k * step` to avoid accumulating rounding
    /// errors; `end` is included when it lies on the grid. Grids with more than
    /// [`MAX_GRID_POINTS`] points are rejected.
    pub fn values(&self) -> DiceResult<Vec<f64>> {
        if !self.start.is_finite() || !self.end.is_finite() || !self.step.is_finite() {
            return Err(DiceError::InvalidConfiguration(
                "abatement grid bounds must be finite".to_string(),
            ));
        }
        if !(self.step > 0.0) {
            return Err(DiceError::InvalidConfiguration(format!(
                "abatement grid step must be positive, got {}",
                self.step
            )));
        }
        if self.end < self.start {
            return Err(DiceError::InvalidConfiguration(format!(
                "abatement grid end {} is before start {}",
                self.end, self.start
            )));
        }

        let intervals = ((self.end - self.start) / self.step + 1e-9).floor();
        if !(intervals < MAX_GRID_POINTS as f64) {
            return Err(DiceError::InvalidConfiguration(format!(
                "abatement grid from {} to {} with step {} exceeds {} points",
                self.start, self.end, self.step, MAX_GRID_POINTS
            )));
        }
        let intervals = intervals as usize;
        Ok((0..=intervals)
            .map(|k| self.start + k as f64 * self.step)
            .collect())
    }
}

/// Cooperative cancellation flag for a running sweep.
///
/// Cloning the token shares the flag. Cancellation is checked before each
/// scenario starts; scenarios already running complete normally.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub grid: AbatementGrid,
    /// Abatement level at the first time index of every scenario.
    ///
    /// Default: 0.03
    pub abatement_initial: f64,
    /// Size of the worker pool. Uses the global rayon pool when `None`.
    pub threads: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid: AbatementGrid::default(),
            abatement_initial: 0.03,
            threads: None,
        }
    }
}

/// Outcome of a single grid point.
#[derive(Debug)]
pub struct SweepPoint {
    pub abatement_increase: f64,
    /// The scenario objective, or the error that aborted the scenario.
    pub objective: DiceResult<f64>,
}

#[derive(Debug)]
pub struct SweepResult {
    /// Completed grid points, in grid order.
    pub points: Vec<SweepPoint>,
    /// Whether the sweep was cancelled before every grid point ran.
    pub cancelled: bool,
}

impl SweepResult {
    /// The successful point with the highest objective.
    pub fn best(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| match p.objective {
                Ok(objective) => Some((p.abatement_increase, objective)),
                Err(_) => None,
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// `(abatement_increase, objective)` pairs of the successful points.
    pub fn successes(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.objective.as_ref().ok().map(|v| (p.abatement_increase, *v)))
            .collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SweepPoint> {
        self.points.iter().filter(|p| p.objective.is_err())
    }
}

/// Runs the base scenario once per point of an abatement-increase grid.
#[derive(Debug, Clone)]
pub struct ScenarioSweep {
    base: ScenarioConfig,
    config: SweepConfig,
    grid_values: Vec<f64>,
}

impl ScenarioSweep {
    pub fn new(base: ScenarioConfig, config: SweepConfig) -> DiceResult<Self> {
        let grid_values = config.grid.values()?;
        if config.threads == Some(0) {
            return Err(DiceError::InvalidConfiguration(
                "a sweep needs at least one thread".to_string(),
            ));
        }
        Ok(Self {
            base,
            config,
            grid_values,
        })
    }

    pub fn grid_values(&self) -> &[f64] {
        &self.grid_values
    }

    /// The configuration of the scenario at `abatement_increase`.
    pub fn scenario_config(&self, abatement_increase: f64) -> ScenarioConfig {
        self.base
            .clone()
            .with_abatement_ramp(self.config.abatement_initial, abatement_increase)
    }

    /// Run a fresh, independent scenario and return its objective.
    pub fn run_scenario(&self, abatement_increase: f64) -> DiceResult<f64> {
        let trajectory = Simulation::new(self.scenario_config(abatement_increase))?.run()?;
        trajectory.objective().ok_or_else(|| {
            DiceError::InvalidConfiguration("scenario produced no objective".to_string())
        })
    }

    /// Run every grid point.
    pub fn run(&self, token: &CancellationToken) -> DiceResult<SweepResult> {
        self.run_with_progress(token, |_| {})
    }

    /// Run every grid point, calling `progress` as each scenario completes.
    ///
    /// `progress` may be called from several worker threads at once and in any order.
    pub fn run_with_progress<F>(
        &self,
        token: &CancellationToken,
        progress: F,
    ) -> DiceResult<SweepResult>
    where
        F: Fn(&SweepPoint) + Sync,
    {
        let evaluate = || -> Vec<Option<SweepPoint>> {
            self.grid_values
                .par_iter()
                .map(|&abatement_increase| {
                    if token.is_cancelled() {
                        return None;
                    }
                    let point = SweepPoint {
                        abatement_increase,
                        objective: self.run_scenario(abatement_increase),
                    };
                    if let Err(e) = &point.objective {
                        warn!(
                            "Scenario with abatement increase {} failed: {}",
                            abatement_increase, e
                        );
                    }
                    progress(&point);
                    Some(point)
                })
                .collect()
        };

        let outcomes = match self.config.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| DiceError::ThreadPool(e.to_string()))?
                .install(evaluate),
            None => evaluate(),
        };

        let points: Vec<SweepPoint> = outcomes.into_iter().flatten().collect();
        let cancelled = points.len() < self.grid_values.len();
        if cancelled {
            warn!(
                "Sweep cancelled after {} of {} scenarios",
                points.len(),
                self.grid_values.len()
            );
        }
        info!(
            "Sweep finished: {} scenarios, {} failed",
            points.len(),
            points.iter().filter(|p| p.objective.is_err()).count()
        );

        Ok(SweepResult { points, cancelled })
    }
}
