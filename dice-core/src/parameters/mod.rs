//! Physical parameters for the geophysical transitions.
//!
//! Each parameter struct provides defaults matching the DICE-2016 calibration.

mod carbon_cycle;
mod temperature;

pub use carbon_cycle::CarbonCycleParameters;
pub use temperature::TemperatureParameters;
