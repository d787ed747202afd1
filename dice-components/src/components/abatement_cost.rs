use crate::parameters::AbatementCostParameters;
use dice_core::errors::{ensure_finite, DiceError, DiceResult, Submodel};

/// Cost of abatement as a fraction of output.
///
/// $$ \Lambda(t, \mu) = p_0 (1 - r_b)^t \frac{\mu^{\theta_2}}{\theta_2} $$
#[derive(Debug, Clone)]
pub struct AbatementCostFunction {
    parameters: AbatementCostParameters,
}

impl AbatementCostFunction {
    /// Create the cost function, rejecting a non-positive exponent.
    pub fn from_parameters(parameters: AbatementCostParameters) -> DiceResult<Self> {
        if !(parameters.theta2 > 0.0) {
            return Err(DiceError::InvalidConfiguration(format!(
                "abatement cost exponent theta2 must be positive, got {}",
                parameters.theta2
            )));
        }
        Ok(Self { parameters })
    }

    /// Price of the backstop technology at `time`.
    pub fn backstop_price(&self, time: f64) -> f64 {
        self.parameters.backstop_price_initial * (1.0 - self.parameters.backstop_rate).powf(time)
    }

    /// Cost fraction at `time` for the abatement level `abatement`.
    pub fn calculate_cost(&self, time: f64, abatement: f64) -> DiceResult<f64> {
        let theta2 = self.parameters.theta2;
        let cost = self.backstop_price(time) * abatement.powf(theta2) / theta2;
        ensure_finite(cost, Submodel::AbatementCost)
    }

    pub fn parameters(&self) -> &AbatementCostParameters {
        &self.parameters
    }
}
