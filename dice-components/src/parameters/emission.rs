//! Emission parameters
//!
//! Industrial emissions are the product of output and an emission intensity
//! that decays over time. Land-use (external) emissions decay independently.

use serde::{Deserialize, Serialize};

/// Initial industrial emissions (GtCO2/yr).
pub const INITIAL_EMISSIONS: f64 = 35.85;
/// Initial global output (trillion USD/yr).
pub const INITIAL_OUTPUT: f64 = 105.5;
/// Mitigation rate already in place at the start of the run.
pub const INITIAL_MITIGATION: f64 = 0.03;

/// Parameters for the emission intensity of output.
///
/// $$ g(t) = g_0 (1 - d)^t, \quad \sigma(t) = \sigma_0 e^{-g(t) t} $$
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionIntensityParameters {
    /// Initial emission intensity $\sigma_0$ (emissions per unit output).
    ///
    /// Default: $e_0 / (q_0 (1 - \mu_0))$ with $e_0 = 35.85$, $q_0 = 105.5$, $\mu_0 = 0.03$
    pub intensity_initial: f64,

    /// Initial decline rate of the emission intensity $g_0$ (1/yr).
    ///
    /// Default: 0.0152
    pub rate_initial: f64,

    /// Decay of the decline rate $d$ (1/yr).
    ///
    /// Default: 0.001
    pub rate_decay: f64,
}

impl Default for EmissionIntensityParameters {
    fn default() -> Self {
        Self {
            intensity_initial: INITIAL_EMISSIONS / (INITIAL_OUTPUT * (1.0 - INITIAL_MITIGATION)),
            rate_initial: 0.0152,
            rate_decay: 0.001,
        }
    }
}

/// Parameters for external (land-use) emissions.
///
/// The decay is calibrated per five-year period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionParameters {
    /// External emissions at $t = 0$ (GtCO2/yr).
    ///
    /// Default: 2.6
    pub external_initial: f64,

    /// Decay of external emissions per five-year period.
    ///
    /// Default: 0.115
    pub external_decay: f64,
}

impl Default for EmissionParameters {
    fn default() -> Self {
        Self {
            external_initial: 2.6,
            external_decay: 0.115,
        }
    }
}
