//! Configuration of a single run.
//!
//! Loaded from a JSON file with sensible defaults, then validated before any generation is
//! stepped. The simulation functions themselves assume a valid configuration.

use crate::{
    constants::{
        RABBITS_DEFAULT_GENERATIONS, RABBITS_DEFAULT_MUTATION_RATE, RABBITS_DEFAULT_POPULATION,
    },
    serde_traits::{FromJson, ToJson},
    ConfigError, Environment, Trait,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunConfig {
    /// Number of rabbits seeded at the start
    pub population_size: usize,
    /// Number of generations to step
    pub generations: usize,
    /// Per-trait chance of a child's trait mutating
    pub mutation_rate: f64,
    /// Seed for the run's generator, OS-seeded when absent
    pub seed: Option<u64>,
    pub environment: Environment,
    /// Traits that crossover, mutate and are reported
    pub traits: Vec<Trait>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            population_size: RABBITS_DEFAULT_POPULATION,
            generations: RABBITS_DEFAULT_GENERATIONS,
            mutation_rate: RABBITS_DEFAULT_MUTATION_RATE,
            seed: None,
            environment: Environment::default(),
            traits: Trait::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = <Self as FromJson>::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        Ok(self.to_file(path)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationSize);
        }
        if self.generations == 0 {
            return Err(ConfigError::Generations);
        }
        if !(0. ..=1.).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }

        let food = self.environment.food_availability;
        if !(food.is_finite() && food > 0.) {
            return Err(ConfigError::FoodAvailability(food));
        }
        if !self.environment.predator_pressure.is_finite() {
            return Err(ConfigError::PredatorPressure(
                self.environment.predator_pressure,
            ));
        }
        if self.traits.is_empty() {
            return Err(ConfigError::NoTraits);
        }
        for (idx, t) in self.traits.iter().enumerate() {
            if self.traits[..idx].contains(t) {
                return Err(ConfigError::DuplicateTrait(*t));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::new_t;
    use std::env::temp_dir;

    type T = RunConfig;

    #[test]
    fn test_default_config_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(20, config.population_size);
        assert_eq!(50, config.generations);
        assert_eq!(0.1, config.mutation_rate);
        assert_eq!(Trait::ALL.to_vec(), config.traits);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            new_t!(population_size = 0).validate(),
            Err(ConfigError::PopulationSize)
        ));
        assert!(matches!(
            new_t!(generations = 0).validate(),
            Err(ConfigError::Generations)
        ));
        for rate in [-0.1, 1.5, f64::NAN] {
            assert!(matches!(
                new_t!(mutation_rate = rate).validate(),
                Err(ConfigError::MutationRate(_))
            ));
        }
        for food in [0., -1., f64::INFINITY, f64::NAN] {
            assert!(matches!(
                new_t!(environment = Environment::new(food, 5.)).validate(),
                Err(ConfigError::FoodAvailability(_))
            ));
        }
        assert!(matches!(
            new_t!(environment = Environment::new(1., f64::NAN)).validate(),
            Err(ConfigError::PredatorPressure(_))
        ));
        assert!(matches!(
            new_t!(traits = vec![]).validate(),
            Err(ConfigError::NoTraits)
        ));
    }

    #[test]
    fn test_duplicate_traits_rejected() {
        let config = RunConfig::from_json(r#"{"traits": ["size", "size", "size"]}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTrait(Trait::Size))
        ));
        assert!(matches!(
            new_t!(traits = vec![Trait::Speed, Trait::Camouflage, Trait::Speed]).validate(),
            Err(ConfigError::DuplicateTrait(Trait::Speed))
        ));
        assert!(new_t!(traits = vec![Trait::Camouflage, Trait::Size])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_partial_environment_keeps_default_pressure() {
        let config =
            RunConfig::from_json(r#"{"environment": {"foodAvailability": 2.0}}"#).unwrap();
        assert_eq!(
            RunConfig::default().environment.predator_pressure,
            config.environment.predator_pressure
        );
        assert_eq!(2., config.environment.food_availability);
    }

    #[test]
    fn test_edge_rates_valid() {
        assert!(new_t!(mutation_rate = 0.).validate().is_ok());
        assert!(new_t!(mutation_rate = 1.).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            RunConfig::from_json(r#"{"populationSize": 100, "seed": 7, "traits": ["speed"]}"#)
                .unwrap();
        assert_eq!(
            new_t!(
                population_size = 100,
                seed = Some(7),
                traits = vec![Trait::Speed]
            ),
            config
        );
    }

    #[test]
    fn test_save_load() {
        let path = temp_dir().join(format!("rabbits-config-{}.json", std::process::id()));
        let config = new_t!(generations = 12, seed = Some(99));
        config.save(&path).unwrap();
        assert_eq!(config, RunConfig::load(&path).unwrap());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid() {
        let path = temp_dir().join(format!("rabbits-bad-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"mutationRate": 2.0}"#).unwrap();
        assert!(matches!(
            RunConfig::load(&path),
            Err(ConfigError::MutationRate(_))
        ));
        std::fs::remove_file(path).unwrap();
    }
}
