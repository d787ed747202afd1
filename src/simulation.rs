//! Simulation driver
//!
//! Steps a single scenario forward one year at a time. For each index
//! `i = 0 .. N-2` the quantities are computed in this order:
//!
//! 1. emission, scaled by the abatement relative to the first period
//! 2. carbon mass at `i + 1`
//! 3. forcing from the carbon mass at `i`
//! 4. temperature at `i + 1`
//! 5. damage from the temperature at `i`
//! 6. abatement cost
//! 7. welfare, `gdp * (1 - damage) * (1 - cost)`
//! 8. discounted value (see [`ObjectiveMode`])
//! 9. output at `i + 1`
//!
//! Any error aborts the run and is reported with the failing time index.

use crate::config::{ObjectiveMode, ScenarioConfig};
use crate::trajectory::Trajectory;
use dice_components::components::{
    AbatementCostFunction, DamageFromTemperature, EconomicGrowth, EmissionFunction,
    EmissionIntensityFunction, ForcingFunction,
};
use dice_core::errors::{ensure_finite, DiceResult, Submodel};
use dice_core::transition::{EvolutionOfCarbonConcentration, EvolutionOfTemperature};
use log::{debug, trace};

/// A validated scenario, ready to run.
///
/// The transition operators and submodels are built once, in [`Simulation::new`],
/// and reused for every step. A `Simulation` holds no mutable state, so it can be
/// run repeatedly and shared between threads.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: ScenarioConfig,
    abatement: Vec<f64>,
    temperature_evolution: EvolutionOfTemperature,
    carbon_evolution: EvolutionOfCarbonConcentration,
    forcing: ForcingFunction,
    emission: EmissionFunction,
    damage: DamageFromTemperature,
    abatement_cost: AbatementCostFunction,
    economy: EconomicGrowth,
}

impl Simulation {
    /// Validate `config` and build the operators it needs.
    pub fn new(config: ScenarioConfig) -> DiceResult<Self> {
        config.validate()?;

        let simulation = Self {
            abatement: config.abatement_trajectory(),
            temperature_evolution: EvolutionOfTemperature::from_parameters(&config.temperature)?,
            carbon_evolution: EvolutionOfCarbonConcentration::from_parameters(
                &config.carbon_cycle,
            )?,
            forcing: ForcingFunction::from_parameters(config.forcing.clone()),
            emission: EmissionFunction::from_parameters(
                EmissionIntensityFunction::from_parameters(config.emission_intensity.clone()),
                config.emission.clone(),
            ),
            damage: DamageFromTemperature::from_parameters(config.damage.clone()),
            abatement_cost: AbatementCostFunction::from_parameters(config.abatement_cost.clone())?,
            economy: EconomicGrowth::from_parameters(config.economy.clone())?,
            config,
        };
        Ok(simulation)
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn temperature_evolution(&self) -> &EvolutionOfTemperature {
        &self.temperature_evolution
    }

    pub fn carbon_evolution(&self) -> &EvolutionOfCarbonConcentration {
        &self.carbon_evolution
    }

    /// Run the scenario over all time indices.
    pub fn run(&self) -> DiceResult<Trajectory> {
        let n = self.config.number_of_times;
        debug!(
            "Running scenario with {} time points, abatement {:.4} -> {:.4}",
            n,
            self.abatement[0],
            self.abatement[n - 1]
        );

        let initial_gdp = self.economy.initial_gdp().map_err(|e| e.at_time_index(0))?;
        let mut trajectory = Trajectory::new(
            self.abatement.clone(),
            initial_gdp,
            self.config.initial_temperature,
            self.config.initial_carbon,
        );

        for i in 0..n - 1 {
            self.step(i, &mut trajectory)
                .map_err(|e| e.at_time_index(i))?;
        }

        debug!("Scenario finished with objective {:?}", trajectory.objective());
        Ok(trajectory)
    }

    fn step(&self, i: usize, trajectory: &mut Trajectory) -> DiceResult<()> {
        let time = i as f64;
        let gdp = trajectory.gdp[i];
        let temperature = trajectory.temperature[i];
        let carbon = trajectory.carbon[i];

        // Abatement is applied relative to the first period, outside the emission submodel
        let relative_abatement = (1.0 - self.abatement[i]) / (1.0 - self.abatement[0]);
        let emission = ensure_finite(
            self.emission.calculate_emission(time, gdp)? * relative_abatement,
            Submodel::Emission,
        )?;

        let carbon_next = self.carbon_evolution.apply(&carbon, emission)?;

        let forcing = self
            .forcing
            .calculate_forcing(&carbon, self.config.external_forcing)?;
        let temperature_next = self.temperature_evolution.apply(&temperature, forcing)?;

        let damage = self.damage.calculate_damage(temperature.atmosphere)?;
        let abatement_cost = self
            .abatement_cost
            .calculate_cost(time, self.abatement[i])?;

        let welfare = ensure_finite(
            gdp * (1.0 - damage) * (1.0 - abatement_cost),
            Submodel::Welfare,
        )?;
        let discounted = welfare * self.economy.discount_factor(time);
        let value = match self.config.objective_mode {
            ObjectiveMode::PeriodDiscounted => discounted,
            ObjectiveMode::CumulativeNpv if i == 0 => discounted,
            ObjectiveMode::CumulativeNpv => trajectory.value[i - 1] + discounted,
        };
        let value = ensure_finite(value, Submodel::Objective)?;

        let gdp_next = self.economy.next_gdp(gdp)?;

        trace!(
            "i={} emission={:.4} forcing={:.4} T_at={:.4} M_at={:.2} damage={:.6} cost={:.6} welfare={:.4}",
            i,
            emission,
            forcing,
            temperature.atmosphere,
            carbon.atmosphere,
            damage,
            abatement_cost,
            welfare
        );

        trajectory.emission[i] = emission;
        trajectory.carbon.push(carbon_next);
        trajectory.forcing[i] = forcing;
        trajectory.temperature.push(temperature_next);
        trajectory.damage[i] = damage;
        trajectory.abatement_cost[i] = abatement_cost;
        trajectory.welfare[i] = welfare;
        trajectory.value[i] = value;
        trajectory.gdp[i + 1] = gdp_next;

        Ok(())
    }
}

/// Validate `config`, run it and return the trajectory.
pub fn run_scenario(config: ScenarioConfig) -> DiceResult<Trajectory> {
    Simulation::new(config)?.run()
}
