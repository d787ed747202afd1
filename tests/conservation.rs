//! Conservation and structural properties of the geophysical transitions.

use approx::assert_relative_eq;
use dice::parameters::{EmissionIntensityParameters, EmissionParameters};
use dice::{
    run_scenario, CarbonConcentration, CarbonCycleParameters, EvolutionOfCarbonConcentration,
    ScenarioConfig,
};

mod carbon_mass {
    use super::*;

    /// Carbon mass only changes by the injected emissions.
    #[test]
    fn test_mass_never_exceeds_previous_plus_emission() {
        let trajectory = run_scenario(ScenarioConfig::default()).unwrap();

        for i in 0..trajectory.len() - 1 {
            let before = trajectory.carbon[i].total();
            let after = trajectory.carbon[i + 1].total();
            let emission = trajectory.emission[i];

            assert!(
                after <= before + emission + 1e-9,
                "Carbon mass grew by more than the emissions at {}: {} -> {} (E = {})",
                i,
                before,
                after,
                emission
            );
            assert_relative_eq!(after, before + emission, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_no_emissions_conserves_mass() {
        let config = ScenarioConfig {
            emission_intensity: EmissionIntensityParameters {
                intensity_initial: 0.0,
                ..Default::default()
            },
            emission: EmissionParameters {
                external_initial: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let trajectory = run_scenario(config).unwrap();

        let initial = trajectory.carbon[0].total();
        for carbon in &trajectory.carbon {
            assert_relative_eq!(carbon.total(), initial, epsilon = 1e-8);
        }
        assert!(trajectory.emission.iter().all(|&e| e == 0.0));
    }

    /// Without emissions the reservoirs decay towards the equilibrium distribution.
    #[test]
    fn test_decay_towards_equilibrium() {
        let params = CarbonCycleParameters::default();
        let evolution = EvolutionOfCarbonConcentration::from_parameters(&params).unwrap();

        let equilibrium = CarbonConcentration::new(params.mateq, params.mueq, params.mleq);
        let mut carbon = CarbonConcentration::new(851.0, 460.0, 1740.0);
        let scale = carbon.total() / equilibrium.total();

        let distance = |c: &CarbonConcentration| {
            (c.as_vector() - equilibrium.as_vector() * scale).abs().sum()
        };

        let initial_distance = distance(&carbon);
        for _ in 0..2000 {
            carbon = evolution.apply(&carbon, 0.0).unwrap();
        }
        assert!(
            distance(&carbon) < 0.1 * initial_distance,
            "Distance to equilibrium should shrink: {} -> {}",
            initial_distance,
            distance(&carbon)
        );
        assert!(carbon.atmosphere > 0.0 && carbon.upper_ocean > 0.0 && carbon.lower_ocean > 0.0);
    }

    #[test]
    fn test_matrix_construction_is_idempotent() {
        let params = CarbonCycleParameters::default();
        let first = EvolutionOfCarbonConcentration::from_parameters(&params).unwrap();
        let second = EvolutionOfCarbonConcentration::from_parameters(&params).unwrap();

        let first_bits: Vec<u64> = first.matrix().iter().map(|x| x.to_bits()).collect();
        let second_bits: Vec<u64> = second.matrix().iter().map(|x| x.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }
}

mod temperature {
    use super::*;
    use dice::{EvolutionOfTemperature, TemperatureParameters};

    #[test]
    fn test_constant_forcing_approaches_equilibrium_warming() {
        let params = TemperatureParameters::default();
        let evolution = EvolutionOfTemperature::from_parameters(&params).unwrap();

        // Equilibrium: both boxes at F / lambda
        let forcing = params.eta;
        let mut temperature = dice::Temperature::new(0.0, 0.0);
        for _ in 0..3000 {
            temperature = evolution.apply(&temperature, forcing).unwrap();
        }
        assert_relative_eq!(temperature.atmosphere, params.t2xco2, epsilon = 1e-6);
        assert_relative_eq!(temperature.lower_ocean, params.t2xco2, epsilon = 1e-6);
    }
}
