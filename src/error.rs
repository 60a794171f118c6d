use crate::Trait;
use rand::distr::weighted;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures of a running simulation.
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Every member of a non-empty population scored zero (or the sum is not finite), so
    /// fitness-proportional selection has nothing to be proportional to.
    #[error("cannot select from {population} rabbits with a total fitness of {total}")]
    DegenerateFitness { population: usize, total: f64 },

    #[error("invalid selection weights: {0}")]
    Weights(#[from] weighted::Error),

    /// The population shrank to nothing, leaving no trait averages to report.
    #[error("population went extinct in generation {generation}")]
    Extinct { generation: usize },
}

/// Rejected run configurations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("population size must be greater than 0")]
    PopulationSize,

    #[error("generations must be greater than 0")]
    Generations,

    #[error("mutation rate must be within [0, 1], got {0}")]
    MutationRate(f64),

    #[error("food availability must be positive and finite, got {0}")]
    FoodAvailability(f64),

    #[error("predator pressure must be finite, got {0}")]
    PredatorPressure(f64),

    #[error("at least one trait must be allowed to evolve")]
    NoTraits,

    #[error("trait {0} is listed more than once")]
    DuplicateTrait(Trait),

    #[error(transparent)]
    File(#[from] FileError),
}

/// Failures reading or writing the crate's JSON files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}
