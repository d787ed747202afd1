//! Driver submodels for a DICE-style climate-economy model.
//!
//! # Module Organisation
//!
//! - `components`: the submodels themselves. Each holds only its constants and
//!   exposes pure evaluation methods taking all state explicitly.
//! - `parameters`: one parameters struct per submodel with defaults matching the
//!   DICE-2016 calibration.

pub mod components;
pub mod parameters;
