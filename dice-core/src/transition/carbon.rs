use crate::errors::{DiceError, DiceResult, Submodel};
use crate::parameters::CarbonCycleParameters;
use crate::state::CarbonConcentration;
use log::debug;
use nalgebra::Matrix3;

use super::require_finite_parameter;

/// Three-reservoir carbon transition.
///
/// $$ M_{t+1} = \zeta M_t + (E_t, 0, 0) $$
///
/// Emissions are injected into the atmosphere only. Every column of $\zeta$ sums
/// to one, so the linear part moves carbon between reservoirs without creating
/// or destroying mass.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOfCarbonConcentration {
    zeta: Matrix3<f64>,
}

impl EvolutionOfCarbonConcentration {
    /// Build the transition matrix from the physical parameters.
    pub fn from_parameters(parameters: &CarbonCycleParameters) -> DiceResult<Self> {
        let CarbonCycleParameters {
            b12,
            b23,
            mateq,
            mueq,
            mleq,
        } = *parameters;

        for (name, value) in [
            ("b12", b12),
            ("b23", b23),
            ("mateq", mateq),
            ("mueq", mueq),
            ("mleq", mleq),
        ] {
            require_finite_parameter(name, value)?;
        }
        if mueq <= 0.0 || mleq <= 0.0 {
            return Err(DiceError::InvalidConfiguration(format!(
                "equilibrium ocean carbon masses must be positive (mueq={}, mleq={})",
                mueq, mleq
            )));
        }

        let zeta11 = 1.0 - b12;
        let zeta21 = b12;
        let zeta12 = (mateq / mueq) * zeta21;
        let zeta22 = 1.0 - zeta12 - b23;
        let zeta32 = b23;
        let zeta23 = zeta32 * (mueq / mleq);
        let zeta33 = 1.0 - zeta23;

        #[rustfmt::skip]
        let zeta = Matrix3::new(
            zeta11, zeta12, 0.0,
            zeta21, zeta22, zeta23,
            0.0,    zeta32, zeta33,
        );
        debug!("Built carbon transition matrix {:?}", zeta);

        Ok(Self { zeta })
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.zeta
    }

    /// Advance `carbon` by one step, adding `emission` (GtC) to the atmosphere.
    pub fn apply(
        &self,
        carbon: &CarbonConcentration,
        emission: f64,
    ) -> DiceResult<CarbonConcentration> {
        if !carbon.is_finite() || !emission.is_finite() {
            return Err(DiceError::domain(
                Submodel::CarbonTransition,
                format!(
                    "non-finite input (carbon={:?}, emission={})",
                    carbon, emission
                ),
            ));
        }

        let mut next = CarbonConcentration::from_vector(&(self.zeta * carbon.as_vector()));
        next.atmosphere += emission;

        if !next.is_finite() {
            return Err(DiceError::domain(
                Submodel::CarbonTransition,
                format!("produced a non-finite state {:?}", next),
            ));
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_evolution() -> EvolutionOfCarbonConcentration {
        EvolutionOfCarbonConcentration::from_parameters(&CarbonCycleParameters::default())
            .unwrap()
    }

    #[test]
    fn test_matrix_coefficients() {
        let zeta = *default_evolution().matrix();

        assert_relative_eq!(zeta[(0, 0)], 0.88, epsilon = 1e-15);
        assert_relative_eq!(zeta[(1, 0)], 0.12, epsilon = 1e-15);
        assert_relative_eq!(zeta[(0, 1)], 588.0 / 360.0 * 0.12, epsilon = 1e-15);
        assert_relative_eq!(
            zeta[(1, 1)],
            1.0 - 588.0 / 360.0 * 0.12 - 0.007,
            epsilon = 1e-15
        );
        assert_relative_eq!(zeta[(2, 1)], 0.007, epsilon = 1e-15);
        assert_relative_eq!(zeta[(1, 2)], 0.007 * 360.0 / 1720.0, epsilon = 1e-15);
        assert_relative_eq!(zeta[(2, 2)], 1.0 - 0.007 * 360.0 / 1720.0, epsilon = 1e-15);
        assert_eq!(zeta[(0, 2)], 0.0);
        assert_eq!(zeta[(2, 0)], 0.0);
    }

    #[test]
    fn test_columns_conserve_mass() {
        let zeta = *default_evolution().matrix();
        for column in zeta.column_iter() {
            assert_relative_eq!(column.sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equilibrium_is_stationary() {
        let params = CarbonCycleParameters::default();
        let evolution = default_evolution();
        let equilibrium = CarbonConcentration::new(params.mateq, params.mueq, params.mleq);

        let next = evolution.apply(&equilibrium, 0.0).unwrap();
        assert_relative_eq!(next.atmosphere, params.mateq, epsilon = 1e-9);
        assert_relative_eq!(next.upper_ocean, params.mueq, epsilon = 1e-9);
        assert_relative_eq!(next.lower_ocean, params.mleq, epsilon = 1e-9);
    }

    #[test]
    fn test_emission_enters_atmosphere_only() {
        let evolution = default_evolution();
        let carbon = CarbonConcentration::default();

        let without = evolution.apply(&carbon, 0.0).unwrap();
        let with = evolution.apply(&carbon, 10.0).unwrap();

        assert_relative_eq!(with.atmosphere - without.atmosphere, 10.0, epsilon = 1e-9);
        assert_eq!(with.upper_ocean, without.upper_ocean);
        assert_eq!(with.lower_ocean, without.lower_ocean);
    }

    #[test]
    fn test_construction_is_deterministic() {
        let params = CarbonCycleParameters::default();
        let a = EvolutionOfCarbonConcentration::from_parameters(&params).unwrap();
        let b = EvolutionOfCarbonConcentration::from_parameters(&params).unwrap();
        for (x, y) in a.matrix().iter().zip(b.matrix().iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_non_finite_emission_fails() {
        let err = default_evolution()
            .apply(&CarbonConcentration::default(), f64::NAN)
            .unwrap_err();
        assert_eq!(err.submodel(), Some(Submodel::CarbonTransition));
    }

    #[test]
    fn test_non_positive_equilibrium_is_rejected() {
        let params = CarbonCycleParameters {
            mueq: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            EvolutionOfCarbonConcentration::from_parameters(&params),
            Err(DiceError::InvalidConfiguration(_))
        ));
    }
}
