//! Evolution of a rabbit population under fitness-proportional selection.
//!
//! Each generation scores every rabbit against its [Environment], resamples the population in
//! proportion to those scores, then breeds the resampled parents pairwise with crossover and
//! mutation. Randomness is always passed in, so a seeded run is fully reproducible.

pub mod config;
pub mod constants;
pub mod engine;
pub mod environment;
pub mod error;
pub mod fitness;
pub mod macros;
pub mod organism;
pub mod random;
pub mod reproduce;
pub mod select;
pub mod serde_traits;
pub mod stats;

pub use config::RunConfig;
pub use engine::{step, EvolutionEngine, EvolutionHooks, Hook, Stats};
pub use environment::Environment;
pub use error::{ConfigError, EvolutionError, FileError};
pub use fitness::fitness;
pub use organism::{create_population, Organism, Population, Trait};
pub use random::{default_rng, Happens, WyRng};
pub use stats::{GenerationRecord, History, TraitAverages};
