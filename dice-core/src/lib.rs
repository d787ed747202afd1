//! Core types for a discrete-time coupled climate-economy model.
//!
//! - `state`: the geophysical state (temperature, carbon mass)
//! - `parameters`: physical constants for the state transitions
//! - `transition`: the fixed linear operators advancing the state by one year
//! - `errors`: the error taxonomy shared by every crate in the workspace

pub mod errors;
pub mod parameters;
pub mod state;
pub mod transition;
