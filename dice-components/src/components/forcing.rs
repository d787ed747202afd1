//! Radiative forcing from atmospheric carbon
//!
//! Uses the standard logarithmic relationship between carbon mass and forcing.

use crate::parameters::ForcingParameters;
use dice_core::errors::{ensure_finite, DiceError, DiceResult, Submodel};
use dice_core::state::CarbonConcentration;

/// Radiative forcing from the atmospheric carbon mass.
///
/// $$ F = \eta \frac{\log(M_{AT} / M_{base})}{\log 2} + F_{ext} $$
#[derive(Debug, Clone)]
pub struct ForcingFunction {
    parameters: ForcingParameters,
}

impl ForcingFunction {
    pub fn from_parameters(parameters: ForcingParameters) -> Self {
        Self { parameters }
    }

    /// Calculate the forcing (W/m^2) for `carbon` plus a constant `external_forcing`.
    ///
    /// Fails if the atmospheric carbon mass is not positive.
    pub fn calculate_forcing(
        &self,
        carbon: &CarbonConcentration,
        external_forcing: f64,
    ) -> DiceResult<f64> {
        if !(carbon.atmosphere > 0.0) {
            return Err(DiceError::domain(
                Submodel::Forcing,
                format!(
                    "atmospheric carbon must be positive to take its logarithm, got {}",
                    carbon.atmosphere
                ),
            ));
        }

        let forcing = self.parameters.forcing_per_doubling
            * (carbon.atmosphere / self.parameters.carbon_concentration_base).ln()
            / 2.0_f64.ln()
            + external_forcing;

        ensure_finite(forcing, Submodel::Forcing)
    }

    pub fn parameters(&self) -> &ForcingParameters {
        &self.parameters
    }
}

impl Default for ForcingFunction {
    fn default() -> Self {
        Self::from_parameters(ForcingParameters::default())
    }
}
