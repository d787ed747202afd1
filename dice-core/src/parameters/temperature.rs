//! Temperature parameters
//!
//! Parameters for the two-box (atmosphere, lower ocean) energy balance.

use serde::{Deserialize, Serialize};

/// Parameters for the two-box temperature response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureParameters {
    /// Speed of adjustment of the atmospheric temperature (ξ1).
    ///
    /// Default: 0.1005
    pub xi1: f64,

    /// Forcing of an equilibrium CO2 doubling (η), W/m^2.
    ///
    /// Default: 3.6813
    pub eta: f64,

    /// Heat transfer coefficient from the atmosphere to the lower ocean.
    ///
    /// Default: 0.088
    pub c3: f64,

    /// Heat transfer coefficient of the lower ocean.
    ///
    /// Default: 0.025
    pub c4: f64,

    /// Equilibrium temperature change for a doubling of CO2 (°C).
    ///
    /// Default: 3.1
    pub t2xco2: f64,
}

impl Default for TemperatureParameters {
    fn default() -> Self {
        Self {
            xi1: 0.1005,
            eta: 3.6813,
            c3: 0.088,
            c4: 0.025,
            t2xco2: 3.1,
        }
    }
}

impl TemperatureParameters {
    /// Climate feedback parameter, $\lambda = \eta / T_{2xCO2}$ (W/m^2/°C).
    pub fn lambda(&self) -> f64 {
        self.eta / self.t2xco2
    }
}
