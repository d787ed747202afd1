//! Economy parameters
//!
//! Output follows an exogenous geometric growth path starting from a
//! Cobb-Douglas production level.

use serde::{Deserialize, Serialize};

/// Parameters for the exogenous economic path and its valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyParameters {
    /// Initial total factor productivity.
    ///
    /// Default: 5.115
    pub a0: f64,

    /// Initial capital (trillion USD).
    ///
    /// Default: 223.0
    pub k0: f64,

    /// Initial world population (millions).
    ///
    /// Default: 7403.0
    pub l0: f64,

    /// Capital elasticity of production $\gamma$.
    ///
    /// Default: 0.3
    pub gamma: f64,

    /// Annual growth rate of output.
    ///
    /// Default: 0.02
    pub growth: f64,

    /// Continuous discount rate $r$ applied to welfare.
    ///
    /// Default: 0.03
    pub discount_rate: f64,
}

impl Default for EconomyParameters {
    fn default() -> Self {
        Self {
            a0: 5.115,
            k0: 223.0,
            l0: 7403.0,
            gamma: 0.3,
            growth: 0.02,
            discount_rate: 0.03,
        }
    }
}
