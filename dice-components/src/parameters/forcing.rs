use serde::{Deserialize, Serialize};

/// Parameters for radiative forcing from atmospheric carbon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForcingParameters {
    /// Forcing of a doubling of atmospheric carbon (W/m^2).
    ///
    /// Default: 3.6813
    pub forcing_per_doubling: f64,

    /// Reference atmospheric carbon mass at which forcing is zero (GtC).
    ///
    /// Default: 588.0
    pub carbon_concentration_base: f64,
}

impl Default for ForcingParameters {
    fn default() -> Self {
        Self {
            forcing_per_doubling: 3.6813,
            carbon_concentration_base: 588.0,
        }
    }
}
