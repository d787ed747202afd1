use crate::parameters::DamageParameters;
use dice_core::errors::{ensure_finite, DiceResult, Submodel};

/// Fraction of output lost to climate damage.
///
/// $$ D(T) = \frac{d_0 + d_1 T + d_2 T^2}{1 + d_0 + d_1 T + d_2 T^2} $$
///
/// No damage occurs at the baseline temperature, for any set of coefficients.
/// `T = 0` returns exactly zero instead of evaluating the formula, so with
/// `d0 != 0` the damage is not continuous at the baseline: it jumps from 0 to
/// `d0 / (1 + d0)` for any non-zero temperature.
/// The result lies in $[0, 1)$ while the polynomial is non-negative.
/// A negative polynomial flips the sign of the ratio; this is not guarded against.
#[derive(Debug, Clone)]
pub struct DamageFromTemperature {
    parameters: DamageParameters,
}

impl DamageFromTemperature {
    pub fn from_parameters(parameters: DamageParameters) -> Self {
        Self { parameters }
    }

    /// Damage fraction for an atmospheric temperature anomaly (°C).
    pub fn calculate_damage(&self, temperature: f64) -> DiceResult<f64> {
        let DamageParameters { d0, d1, d2 } = self.parameters;
        // Anchored at the baseline regardless of d0
        if temperature == 0.0 {
            return Ok(0.0);
        }
        let raw = d0 + d1 * temperature + d2 * temperature * temperature;
        ensure_finite(raw / (1.0 + raw), Submodel::Damage)
    }

    pub fn parameters(&self) -> &DamageParameters {
        &self.parameters
    }
}

impl Default for DamageFromTemperature {
    fn default() -> Self {
        Self::from_parameters(DamageParameters::default())
    }
}
