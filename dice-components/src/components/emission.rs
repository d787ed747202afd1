//! Emissions from economic output
//!
//! # What This Module Does
//!
//! 1. Tracks the emission intensity of output, whose decline rate itself decays
//! 2. Adds external (land-use) emissions, which decay per five-year period
//!
//! Abatement is not applied by these submodels. The simulation scales
//! the emissions by the relative abatement level outside of `EmissionFunction`.

use crate::parameters::{EmissionIntensityParameters, EmissionParameters};
use dice_core::errors::{ensure_finite, DiceResult, Submodel};

/// Length of the period the external emission decay is calibrated for (yr).
const EXTERNAL_DECAY_PERIOD: f64 = 5.0;

/// Emission intensity of output as a function of time (yr).
#[derive(Debug, Clone)]
pub struct EmissionIntensityFunction {
    parameters: EmissionIntensityParameters,
}

impl EmissionIntensityFunction {
    pub fn from_parameters(parameters: EmissionIntensityParameters) -> Self {
        Self { parameters }
    }

    /// Decline rate of the emission intensity, $g(t) = g_0 (1 - d)^t$.
    pub fn emission_intensity_rate(&self, time: f64) -> f64 {
        self.parameters.rate_initial * (1.0 - self.parameters.rate_decay).powf(time)
    }

    /// Emission intensity, $\sigma(t) = \sigma_0 e^{-g(t) t}$.
    pub fn emission_intensity(&self, time: f64) -> f64 {
        self.parameters.intensity_initial * (-self.emission_intensity_rate(time) * time).exp()
    }

    pub fn parameters(&self) -> &EmissionIntensityParameters {
        &self.parameters
    }
}

impl Default for EmissionIntensityFunction {
    fn default() -> Self {
        Self::from_parameters(EmissionIntensityParameters::default())
    }
}

/// Total emissions (GtCO2/yr) for a given time and output.
///
/// $$ E(t, Y) = \sigma(t) Y + E_{ext,0} (1 - \delta_{ext})^{t/5} $$
#[derive(Debug, Clone)]
pub struct EmissionFunction {
    intensity: EmissionIntensityFunction,
    parameters: EmissionParameters,
}

impl EmissionFunction {
    pub fn from_parameters(
        intensity: EmissionIntensityFunction,
        parameters: EmissionParameters,
    ) -> Self {
        Self {
            intensity,
            parameters,
        }
    }

    /// External emissions at `time`.
    pub fn external_emissions(&self, time: f64) -> f64 {
        self.parameters.external_initial
            * (1.0 - self.parameters.external_decay).powf(time / EXTERNAL_DECAY_PERIOD)
    }

    /// Emissions at `time` for economic output `gdp`.
    pub fn calculate_emission(&self, time: f64, gdp: f64) -> DiceResult<f64> {
        let emission =
            self.intensity.emission_intensity(time) * gdp + self.external_emissions(time);
        ensure_finite(emission, Submodel::Emission)
    }

    pub fn intensity(&self) -> &EmissionIntensityFunction {
        &self.intensity
    }

    pub fn parameters(&self) -> &EmissionParameters {
        &self.parameters
    }
}

impl Default for EmissionFunction {
    fn default() -> Self {
        Self::from_parameters(
            EmissionIntensityFunction::default(),
            EmissionParameters::default(),
        )
    }
}
