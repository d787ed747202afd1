//! Geophysical state of the model.
//!
//! Both state types are small `Copy` values which are replaced, never mutated,
//! at each time step. Histories are stored as flat `Vec`s indexed by time.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Temperature anomaly above the pre-industrial baseline.
///
/// unit: °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Atmospheric temperature anomaly. This component drives damage.
    pub atmosphere: f64,
    /// Lower ocean temperature anomaly.
    pub lower_ocean: f64,
}

impl Temperature {
    pub fn new(atmosphere: f64, lower_ocean: f64) -> Self {
        Self {
            atmosphere,
            lower_ocean,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.atmosphere.is_finite() && self.lower_ocean.is_finite()
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.atmosphere, self.lower_ocean)
    }

    pub fn from_vector(v: &Vector2<f64>) -> Self {
        Self::new(v[0], v[1])
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::new(0.85, 0.0068)
    }
}

/// Carbon mass held in each reservoir.
///
/// unit: GtC
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonConcentration {
    pub atmosphere: f64,
    pub upper_ocean: f64,
    pub lower_ocean: f64,
}

impl CarbonConcentration {
    pub fn new(atmosphere: f64, upper_ocean: f64, lower_ocean: f64) -> Self {
        Self {
            atmosphere,
            upper_ocean,
            lower_ocean,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.atmosphere.is_finite() && self.upper_ocean.is_finite() && self.lower_ocean.is_finite()
    }

    /// Total carbon mass across all three reservoirs.
    pub fn total(&self) -> f64 {
        self.atmosphere + self.upper_ocean + self.lower_ocean
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.atmosphere, self.upper_ocean, self.lower_ocean)
    }

    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Default for CarbonConcentration {
    fn default() -> Self {
        Self::new(851.0, 460.0, 1740.0)
    }
}
