//! A discrete-time coupled climate-economy model in the style of DICE.
//!
//! A scenario evolves the geophysical state (carbon mass in three reservoirs,
//! atmosphere and lower ocean temperature) and an exogenous economic path year by
//! year under a prescribed abatement policy, and values the resulting welfare.
//!
//! - [`config`]: scenario configuration, loadable from TOML
//! - [`simulation`]: the time-stepping driver producing a [`Trajectory`]
//! - [`sweep`]: parallel exploration of abatement policies
//!
//! The state types, transition operators and submodels live in the `dice-core`
//! and `dice-components` crates and are re-exported here.

pub mod config;
pub mod simulation;
pub mod sweep;
mod trajectory;

pub use dice_components::{components, parameters};
pub use dice_core::errors::{DiceError, DiceResult, Submodel};
pub use dice_core::parameters::{CarbonCycleParameters, TemperatureParameters};
pub use dice_core::state::{CarbonConcentration, Temperature};
pub use dice_core::transition::{EvolutionOfCarbonConcentration, EvolutionOfTemperature};

pub use config::{AbatementPath, AbatementRamp, ObjectiveMode, ScenarioConfig};
pub use simulation::{run_scenario, Simulation};
pub use sweep::{
    AbatementGrid, CancellationToken, ScenarioSweep, SweepConfig, SweepPoint, SweepResult,
};
pub use trajectory::Trajectory;
