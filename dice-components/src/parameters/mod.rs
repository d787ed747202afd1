//! Submodel parameters
//!
//! Every struct uses `#[serde(default)]` so that a partial configuration only
//! overrides the values it names.

mod abatement_cost;
mod damage;
mod economy;
mod emission;
mod forcing;

pub use abatement_cost::AbatementCostParameters;
pub use damage::DamageParameters;
pub use economy::EconomyParameters;
pub use emission::{EmissionIntensityParameters, EmissionParameters};
pub use forcing::ForcingParameters;
