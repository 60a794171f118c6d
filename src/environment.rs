use crate::constants::{RABBITS_DEFAULT_FOOD_AVAILABILITY, RABBITS_DEFAULT_PREDATOR_PRESSURE};
use serde::{Deserialize, Serialize};

/// The world a population evolves in. Fixed for the length of a run.
///
/// `predator_pressure` is carried and serialized but not yet consulted by
/// [fitness](crate::fitness::fitness); predation risk is currently driven by a rabbit's own
/// speed and camouflage alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Environment {
    pub food_availability: f64,
    pub predator_pressure: f64,
}

impl Environment {
    pub fn new(food_availability: f64, predator_pressure: f64) -> Self {
        Self {
            food_availability,
            predator_pressure,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            food_availability: RABBITS_DEFAULT_FOOD_AVAILABILITY,
            predator_pressure: RABBITS_DEFAULT_PREDATOR_PRESSURE,
        }
    }
}
