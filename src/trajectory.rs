use dice_core::state::{CarbonConcentration, Temperature};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// The result of a single scenario run.
///
/// Every sequence has one entry per time index. Per-step quantities (emission,
/// damage, abatement cost, forcing, welfare and value) are computed for indices
/// `0..N-1`; their last slot is left at zero. Output and the state histories are
/// populated for every index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub gdp: Array1<f64>,
    pub emission: Array1<f64>,
    pub abatement: Array1<f64>,
    pub damage: Array1<f64>,
    pub abatement_cost: Array1<f64>,
    pub forcing: Array1<f64>,
    pub welfare: Array1<f64>,
    pub value: Array1<f64>,
    pub temperature: Vec<Temperature>,
    pub carbon: Vec<CarbonConcentration>,
}

impl Trajectory {
    /// Allocate a trajectory holding the initial state and the abatement policy.
    pub(crate) fn new(
        abatement: Vec<f64>,
        initial_gdp: f64,
        initial_temperature: Temperature,
        initial_carbon: CarbonConcentration,
    ) -> Self {
        let n = abatement.len();
        let mut gdp = Array1::zeros(n);
        gdp[0] = initial_gdp;

        let mut temperature = Vec::with_capacity(n);
        temperature.push(initial_temperature);
        let mut carbon = Vec::with_capacity(n);
        carbon.push(initial_carbon);

        Self {
            gdp,
            emission: Array1::zeros(n),
            abatement: Array1::from_vec(abatement),
            damage: Array1::zeros(n),
            abatement_cost: Array1::zeros(n),
            forcing: Array1::zeros(n),
            welfare: Array1::zeros(n),
            value: Array1::zeros(n),
            temperature,
            carbon,
        }
    }

    /// Number of time points.
    pub fn len(&self) -> usize {
        self.gdp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gdp.is_empty()
    }

    /// The scenario objective, `value[N-2]`.
    ///
    /// `None` for a trajectory with fewer than two time points.
    pub fn objective(&self) -> Option<f64> {
        let index = self.len().checked_sub(2)?;
        self.value.get(index).copied()
    }
}
