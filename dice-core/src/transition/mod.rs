//! Transition operators advancing the geophysical state by one year.
//!
//! Each operator holds a fixed linear map built once from its physical parameters.
//! Applying the operator multiplies the previous state by the map and adds an
//! external driver (forcing for temperature, emissions for carbon).

mod carbon;
mod temperature;

pub use carbon::EvolutionOfCarbonConcentration;
pub use temperature::EvolutionOfTemperature;

use crate::errors::{DiceError, DiceResult};

pub(crate) fn require_finite_parameter(name: &str, value: f64) -> DiceResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DiceError::InvalidConfiguration(format!(
            "parameter {} must be finite, got {}",
            name, value
        )))
    }
}
