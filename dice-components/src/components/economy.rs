use crate::parameters::EconomyParameters;
use dice_core::errors::{ensure_finite, DiceError, DiceResult, Submodel};

/// Exogenous economic growth path.
///
/// Output starts from the Cobb-Douglas level
///
/// $$ Y_0 = A_0 K_0^\gamma (L_0 / 1000)^{1 - \gamma} $$
///
/// and grows geometrically, $Y_{t+1} = Y_t (1 + g)$.
/// Growth is not fed back from climate damage.
#[derive(Debug, Clone)]
pub struct EconomicGrowth {
    parameters: EconomyParameters,
}

impl EconomicGrowth {
    /// Create the growth path, rejecting non-positive initial conditions.
    pub fn from_parameters(parameters: EconomyParameters) -> DiceResult<Self> {
        for (name, value) in [
            ("a0", parameters.a0),
            ("k0", parameters.k0),
            ("l0", parameters.l0),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(DiceError::InvalidConfiguration(format!(
                    "economic constant {} must be positive, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("gamma", parameters.gamma),
            ("growth", parameters.growth),
            ("discount_rate", parameters.discount_rate),
        ] {
            if !value.is_finite() {
                return Err(DiceError::InvalidConfiguration(format!(
                    "economic constant {} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(Self { parameters })
    }

    /// Output at $t = 0$ (trillion USD/yr).
    pub fn initial_gdp(&self) -> DiceResult<f64> {
        let EconomyParameters { a0, k0, l0, gamma, .. } = self.parameters;
        ensure_finite(
            a0 * k0.powf(gamma) * (l0 / 1000.0).powf(1.0 - gamma),
            Submodel::Economy,
        )
    }

    /// Output one year after a year with output `gdp`.
    pub fn next_gdp(&self, gdp: f64) -> DiceResult<f64> {
        ensure_finite(gdp * (1.0 + self.parameters.growth), Submodel::Economy)
    }

    /// Continuous discount factor $e^{-r t}$.
    pub fn discount_factor(&self, time: f64) -> f64 {
        (-self.parameters.discount_rate * time).exp()
    }

    pub fn parameters(&self) -> &EconomyParameters {
        &self.parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_component() -> EconomicGrowth {
        EconomicGrowth::from_parameters(EconomyParameters::default()).unwrap()
    }

    #[test]
    fn test_initial_gdp() {
        let economy = default_component();
        let expected = 5.115 * 223.0_f64.powf(0.3) * 7.403_f64.powf(0.7);
        assert_relative_eq!(economy.initial_gdp().unwrap(), expected, epsilon = 1e-12);
        // Close to the observed 105.5 trillion USD
        assert!((economy.initial_gdp().unwrap() - 105.18).abs() < 0.01);
    }

    #[test]
    fn test_geometric_growth() {
        let economy = default_component();
        assert_relative_eq!(economy.next_gdp(100.0).unwrap(), 102.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_growth_is_flat() {
        let economy = EconomicGrowth::from_parameters(EconomyParameters {
            growth: 0.0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(economy.next_gdp(42.0).unwrap(), 42.0);
    }

    #[test]
    fn test_discount_factor() {
        let economy = default_component();
        assert_eq!(economy.discount_factor(0.0), 1.0);
        assert_relative_eq!(
            economy.discount_factor(10.0),
            (-0.3_f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_non_positive_constants_are_invalid() {
        for params in [
            EconomyParameters {
                a0: 0.0,
                ..Default::default()
            },
            EconomyParameters {
                k0: -1.0,
                ..Default::default()
            },
            EconomyParameters {
                l0: 0.0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                EconomicGrowth::from_parameters(params),
                Err(DiceError::InvalidConfiguration(_))
            ));
        }
    }
}
