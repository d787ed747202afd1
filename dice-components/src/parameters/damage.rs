use serde::{Deserialize, Serialize};

/// Coefficients of the damage polynomial $d_0 + d_1 T + d_2 T^2$.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageParameters {
    /// Default: 0.0
    pub d0: f64,
    /// Default: 0.0
    pub d1: f64,
    /// Default: 0.00236
    pub d2: f64,
}

impl Default for DamageParameters {
    fn default() -> Self {
        Self {
            d0: 0.0,
            d1: 0.0,
            d2: 0.00236,
        }
    }
}
