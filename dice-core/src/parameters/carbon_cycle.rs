//! Carbon cycle parameters
//!
//! Exchange coefficients and equilibrium masses for the three-reservoir carbon model.

use serde::{Deserialize, Serialize};

/// Parameters for the three-reservoir carbon cycle.
///
/// Carbon flows between the atmosphere and the upper ocean, and between the
/// upper and lower ocean. The reverse flows are fixed by the equilibrium
/// masses so that the equilibrium distribution is stationary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonCycleParameters {
    /// Fraction of atmospheric carbon moving to the upper ocean per year.
    ///
    /// Default: 0.12
    pub b12: f64,

    /// Fraction of upper ocean carbon moving to the lower ocean per year.
    ///
    /// Default: 0.007
    pub b23: f64,

    /// Equilibrium carbon mass in the atmosphere (GtC).
    ///
    /// Default: 588.0
    pub mateq: f64,

    /// Equilibrium carbon mass in the upper ocean (GtC).
    ///
    /// Default: 360.0
    pub mueq: f64,

    /// Equilibrium carbon mass in the lower ocean (GtC).
    ///
    /// Default: 1720.0
    pub mleq: f64,
}

impl Default for CarbonCycleParameters {
    fn default() -> Self {
        Self {
            b12: 0.12,
            b23: 0.007,
            mateq: 588.0,
            mueq: 360.0,
            mleq: 1720.0,
        }
    }
}
