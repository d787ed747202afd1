use serde::{Deserialize, Serialize};

/// Parameters for the cost of abatement.
///
/// The cost is driven by the price of a backstop technology which decays over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbatementCostParameters {
    /// Backstop price at $t = 0$ (thousand USD per tCO2).
    ///
    /// Default: 0.55 (550 USD / 1000)
    pub backstop_price_initial: f64,

    /// Annual decline rate of the backstop price.
    ///
    /// Default: 0.025
    pub backstop_rate: f64,

    /// Exponent of the abatement cost curve $\theta_2$. Must be positive.
    ///
    /// Default: 2.6
    pub theta2: f64,
}

impl Default for AbatementCostParameters {
    fn default() -> Self {
        Self {
            backstop_price_initial: 550.0 / 1000.0,
            backstop_rate: 0.025,
            theta2: 2.6,
        }
    }
}
