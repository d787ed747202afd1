//! Submodels driving the geophysical transitions and the economic valuation.
//!
//! - `ForcingFunction`: carbon mass to radiative forcing
//! - `EmissionIntensityFunction` and `EmissionFunction`: time and output to emissions
//! - `DamageFromTemperature`: temperature to damage fraction
//! - `AbatementCostFunction`: time and abatement level to cost fraction
//! - `EconomicGrowth`: exogenous output path and discounting

mod abatement_cost;
mod damage;
mod economy;
mod emission;
mod forcing;

pub use abatement_cost::AbatementCostFunction;
pub use damage::DamageFromTemperature;
pub use economy::EconomicGrowth;
pub use emission::{EmissionFunction, EmissionIntensityFunction};
pub use forcing::ForcingFunction;
