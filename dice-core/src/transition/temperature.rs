use crate::errors::{DiceError, DiceResult, Submodel};
use crate::parameters::TemperatureParameters;
use crate::state::Temperature;
use log::debug;
use nalgebra::{Matrix2, Vector2};

use super::require_finite_parameter;

/// Two-box temperature transition.
///
/// $$ T_{t+1} = \Phi T_t + (\xi_1 F_t, 0) $$
///
/// with
///
/// $$ \Phi = \begin{pmatrix} 1 - \xi_1 (\eta / T_{2x} + c_3) & \xi_1 c_3 \\ c_4 & 1 - c_4 \end{pmatrix} $$
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOfTemperature {
    phi: Matrix2<f64>,
    xi1: f64,
}

impl EvolutionOfTemperature {
    /// Build the transition matrix from the physical parameters.
    pub fn from_parameters(parameters: &TemperatureParameters) -> DiceResult<Self> {
        let TemperatureParameters {
            xi1,
            eta,
            c3,
            c4,
            t2xco2,
        } = *parameters;

        for (name, value) in [
            ("xi1", xi1),
            ("eta", eta),
            ("c3", c3),
            ("c4", c4),
            ("t2xco2", t2xco2),
        ] {
            require_finite_parameter(name, value)?;
        }
        if t2xco2 == 0.0 {
            return Err(DiceError::InvalidConfiguration(
                "t2xco2 must be non-zero".to_string(),
            ));
        }

        let phi = Matrix2::new(
            1.0 - xi1 * (eta / t2xco2 + c3),
            xi1 * c3,
            c4,
            1.0 - c4,
        );
        debug!("Built temperature transition matrix {:?}", phi);

        Ok(Self { phi, xi1 })
    }

    pub fn matrix(&self) -> &Matrix2<f64> {
        &self.phi
    }

    /// Advance `temperature` by one step under radiative `forcing`.
    pub fn apply(&self, temperature: &Temperature, forcing: f64) -> DiceResult<Temperature> {
        if !temperature.is_finite() || !forcing.is_finite() {
            return Err(DiceError::domain(
                Submodel::TemperatureTransition,
                format!(
                    "non-finite input (temperature={:?}, forcing={})",
                    temperature, forcing
                ),
            ));
        }

        let next = self.phi * temperature.as_vector() + Vector2::new(self.xi1 * forcing, 0.0);
        let next = Temperature::from_vector(&next);
        if !next.is_finite() {
            return Err(DiceError::domain(
                Submodel::TemperatureTransition,
                format!("produced a non-finite state {:?}", next),
            ));
        }
        Ok(next)
    }
}
