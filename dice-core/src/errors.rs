use std::fmt;
use thiserror::Error;

/// The submodel or transition that produced a value.
///
/// Used to identify where a numeric domain error originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submodel {
    Emission,
    CarbonTransition,
    Forcing,
    TemperatureTransition,
    Damage,
    AbatementCost,
    Welfare,
    Objective,
    Economy,
}

impl fmt::Display for Submodel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Submodel::Emission => "emission",
            Submodel::CarbonTransition => "carbon concentration transition",
            Submodel::Forcing => "forcing",
            Submodel::TemperatureTransition => "temperature transition",
            Submodel::Damage => "damage",
            Submodel::AbatementCost => "abatement cost",
            Submodel::Welfare => "welfare",
            Submodel::Objective => "objective",
            Submodel::Economy => "economy",
        };
        f.write_str(name)
    }
}

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum DiceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Numeric domain error in {submodel}{}: {reason}", format_time_index(.time_index))]
    NumericDomain {
        submodel: Submodel,
        time_index: Option<usize>,
        reason: String,
    },
    #[error("Unable to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Unable to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to build the scenario worker pool: {0}")]
    ThreadPool(String),
}

fn format_time_index(time_index: &Option<usize>) -> String {
    match time_index {
        Some(i) => format!(" at time index {}", i),
        None => String::new(),
    }
}

impl DiceError {
    /// Create a domain error for `submodel` that is not yet tied to a time index.
    pub fn domain(submodel: Submodel, reason: impl Into<String>) -> Self {
        DiceError::NumericDomain {
            submodel,
            time_index: None,
            reason: reason.into(),
        }
    }

    /// Attach the time index of the step that failed.
    ///
    /// Only domain errors carry a time index; other variants are returned unchanged.
    /// An index that is already set is preserved.
    pub fn at_time_index(self, index: usize) -> Self {
        match self {
            DiceError::NumericDomain {
                submodel,
                time_index,
                reason,
            } => DiceError::NumericDomain {
                submodel,
                time_index: time_index.or(Some(index)),
                reason,
            },
            other => other,
        }
    }

    /// The submodel responsible for a domain error, if this is one.
    pub fn submodel(&self) -> Option<Submodel> {
        match self {
            DiceError::NumericDomain { submodel, .. } => Some(*submodel),
            _ => None,
        }
    }

    /// The time index at which a domain error occurred, if known.
    pub fn time_index(&self) -> Option<usize> {
        match self {
            DiceError::NumericDomain { time_index, .. } => *time_index,
            _ => None,
        }
    }
}

/// Convenience type for `Result<T, DiceError>`.
pub type DiceResult<T> = Result<T, DiceError>;

/// Return `value` unchanged if it is finite, otherwise a domain error for `submodel`.
pub fn ensure_finite(value: f64, submodel: Submodel) -> DiceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DiceError::domain(
            submodel,
            format!("produced a non-finite value ({})", value),
        ))
    }
}
