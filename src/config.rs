//! Scenario configuration
//!
//! A [`ScenarioConfig`] holds everything a single run needs: initial states,
//! submodel parameters, the abatement policy and the number of yearly steps.
//! Every field has a default, so a TOML document only needs to name what it overrides:
//!
//! ```toml
//! number_of_times = 60
//! objective_mode = "cumulative_npv"
//!
//! [economy]
//! growth = 0.015
//!
//! [abatement]
//! kind = "ramp"
//! initial = 0.03
//! increase = 1.5
//! ```

use dice_components::components::{AbatementCostFunction, EconomicGrowth};
use dice_components::parameters::{
    AbatementCostParameters, DamageParameters, EconomyParameters, EmissionIntensityParameters,
    EmissionParameters, ForcingParameters,
};
use dice_core::errors::{DiceError, DiceResult};
use dice_core::parameters::{CarbonCycleParameters, TemperatureParameters};
use dice_core::state::{CarbonConcentration, Temperature};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How discounted welfare is accumulated into the `value` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveMode {
    /// `value[i] = welfare[i] * exp(-r i)`.
    ///
    /// No accumulation across periods, so the objective is the discounted
    /// welfare of the last computed period.
    #[default]
    PeriodDiscounted,
    /// `value[i] = value[i - 1] + welfare[i] * exp(-r i)`.
    ///
    /// The objective is the net present value over all computed periods.
    CumulativeNpv,
}

/// A linear abatement ramp.
///
/// `abatement[i] = min(initial + increase * i / N, abatement_max)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbatementRamp {
    /// Default: 0.03
    pub initial: f64,
    /// Increase of the abatement level over the full horizon.
    ///
    /// Default: 0.0
    pub increase: f64,
}

impl Default for AbatementRamp {
    fn default() -> Self {
        Self {
            initial: 0.03,
            increase: 0.0,
        }
    }
}

impl AbatementRamp {
    pub fn trajectory(&self, number_of_times: usize, abatement_max: f64) -> Vec<f64> {
        (0..number_of_times)
            .map(|i| {
                (self.initial + self.increase * i as f64 / number_of_times as f64)
                    .min(abatement_max)
            })
            .collect()
    }
}

/// The abatement policy of a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbatementPath {
    /// One value per time index.
    Explicit { values: Vec<f64> },
    Ramp(AbatementRamp),
}

impl Default for AbatementPath {
    fn default() -> Self {
        AbatementPath::Ramp(AbatementRamp::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of yearly time points, at least 2.
    ///
    /// Default: 100
    pub number_of_times: usize,
    pub initial_temperature: Temperature,
    pub initial_carbon: CarbonConcentration,
    /// Constant non-CO2 forcing (W/m^2).
    ///
    /// Default: 0.5
    pub external_forcing: f64,
    /// Upper bound on the abatement level.
    ///
    /// Default: 1.0
    pub abatement_max: f64,
    pub abatement: AbatementPath,
    pub objective_mode: ObjectiveMode,
    pub economy: EconomyParameters,
    pub temperature: TemperatureParameters,
    pub carbon_cycle: CarbonCycleParameters,
    pub forcing: ForcingParameters,
    pub emission_intensity: EmissionIntensityParameters,
    pub emission: EmissionParameters,
    pub damage: DamageParameters,
    pub abatement_cost: AbatementCostParameters,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            number_of_times: 100,
            initial_temperature: Temperature::default(),
            initial_carbon: CarbonConcentration::default(),
            external_forcing: 0.5,
            abatement_max: 1.0,
            abatement: AbatementPath::default(),
            objective_mode: ObjectiveMode::default(),
            economy: EconomyParameters::default(),
            temperature: TemperatureParameters::default(),
            carbon_cycle: CarbonCycleParameters::default(),
            forcing: ForcingParameters::default(),
            emission_intensity: EmissionIntensityParameters::default(),
            emission: EmissionParameters::default(),
            damage: DamageParameters::default(),
            abatement_cost: AbatementCostParameters::default(),
        }
    }
}

impl ScenarioConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// The result is not validated; validation happens when a simulation is built.
    pub fn from_toml_str(document: &str) -> DiceResult<Self> {
        Ok(toml::from_str(document)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DiceResult<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }

    /// Replace the abatement policy with a linear ramp.
    pub fn with_abatement_ramp(mut self, initial: f64, increase: f64) -> Self {
        self.abatement = AbatementPath::Ramp(AbatementRamp { initial, increase });
        self
    }

    /// The abatement level for every time index.
    pub fn abatement_trajectory(&self) -> Vec<f64> {
        match &self.abatement {
            AbatementPath::Explicit { values } => values.clone(),
            AbatementPath::Ramp(ramp) => ramp.trajectory(self.number_of_times, self.abatement_max),
        }
    }

    /// Check the configuration before any step is executed.
    pub fn validate(&self) -> DiceResult<()> {
        if self.number_of_times < 2 {
            return Err(DiceError::InvalidConfiguration(format!(
                "number_of_times must be at least 2, got {}",
                self.number_of_times
            )));
        }
        if !(self.abatement_max >= 0.0) || !self.abatement_max.is_finite() {
            return Err(DiceError::InvalidConfiguration(format!(
                "abatement_max must be finite and non-negative, got {}",
                self.abatement_max
            )));
        }
        if !self.initial_temperature.is_finite() || !self.initial_carbon.is_finite() {
            return Err(DiceError::InvalidConfiguration(
                "initial states must be finite".to_string(),
            ));
        }
        if !self.external_forcing.is_finite() {
            return Err(DiceError::InvalidConfiguration(format!(
                "external_forcing must be finite, got {}",
                self.external_forcing
            )));
        }

        let abatement = self.abatement_trajectory();
        if abatement.len() != self.number_of_times {
            return Err(DiceError::InvalidConfiguration(format!(
                "abatement trajectory has {} values, expected {}",
                abatement.len(),
                self.number_of_times
            )));
        }
        if let Some((i, value)) = abatement
            .iter()
            .enumerate()
            .find(|&(_, &a)| !(0.0..=self.abatement_max).contains(&a))
        {
            return Err(DiceError::InvalidConfiguration(format!(
                "abatement[{}] = {} is outside [0, {}]",
                i, value, self.abatement_max
            )));
        }

        EconomicGrowth::from_parameters(self.economy.clone())?;
        AbatementCostFunction::from_parameters(self.abatement_cost.clone())?;
        Ok(())
    }
}
