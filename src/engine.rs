//! The generational loop: selection followed by reproduction, repeated.

use crate::{
    organism::create_population,
    random::{rng_for, WyRng},
    reproduce::reproduce,
    select::select,
    stats::{GenerationRecord, History, TraitAverages},
    Environment, EvolutionError, Organism, Population, RunConfig, Trait,
};
use core::ops::ControlFlow;
use log::{debug, info};
use rand::Rng;

/// Advance `population` by one generation
pub fn step<R: Rng>(
    population: &[Organism],
    env: &Environment,
    mutation_rate: f64,
    traits: &[Trait],
    rng: &mut R,
) -> Result<Population, EvolutionError> {
    let selected = select(population, env, rng)?;
    Ok(reproduce(&selected, mutation_rate, traits, rng))
}

/// Snapshot handed to every hook after a generation is stepped
#[derive(Debug)]
pub struct Stats<'a> {
    pub generation: usize,
    pub population: &'a [Organism],
    pub averages: &'a TraitAverages,
}

impl Stats<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.population.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }
}

pub type Hook = Box<dyn FnMut(&Stats<'_>) -> ControlFlow<()>>;

/// Callbacks run after every generation. Any of them may stop the run early.
#[derive(Default)]
pub struct EvolutionHooks {
    hooks: Vec<Hook>,
}

impl EvolutionHooks {
    pub fn new(hooks: Vec<Hook>) -> Self {
        Self { hooks }
    }

    pub fn push(&mut self, hook: Hook) {
        self.hooks.push(hook);
    }

    /// Every hook sees the generation, even when an earlier one asked to stop
    fn fire(&mut self, stats: &Stats<'_>) -> ControlFlow<()> {
        let mut flow = ControlFlow::Continue(());
        for hook in self.hooks.iter_mut() {
            if hook(stats).is_break() {
                flow = ControlFlow::Break(());
            }
        }
        flow
    }
}

/// Drives populations forward with the random source it owns. Holds no other state between
/// calls.
pub struct EvolutionEngine<R: Rng> {
    rng: R,
}

impl EvolutionEngine<WyRng> {
    /// An engine seeded from `seed`, or from the OS when there is none
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(rng_for(seed))
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn create_population(&mut self, size: usize) -> Population {
        create_population(size, &mut self.rng)
    }

    pub fn step(
        &mut self,
        population: &[Organism],
        env: &Environment,
        mutation_rate: f64,
        traits: &[Trait],
    ) -> Result<Population, EvolutionError> {
        step(population, env, mutation_rate, traits, &mut self.rng)
    }

    /// Seed a population and step it for `config.generations` generations, recording the trait
    /// averages of each. Generations are numbered from 1.
    ///
    /// Stops early, returning what was recorded so far, when a hook breaks. A population that
    /// dies out has no averages to record and fails the run.
    pub fn run(
        &mut self,
        config: &RunConfig,
        hooks: &mut EvolutionHooks,
    ) -> Result<History, EvolutionError> {
        info!(
            "evolving {} rabbits for {} generations (mutation rate {})",
            config.population_size, config.generations, config.mutation_rate
        );

        let mut population = self.create_population(config.population_size);
        let mut history = History::new();
        for generation in 1..=config.generations {
            population = self.step(
                &population,
                &config.environment,
                config.mutation_rate,
                &config.traits,
            )?;

            let averages = TraitAverages::of(&population, &config.traits)
                .ok_or(EvolutionError::Extinct { generation })?;
            debug!(
                "generation {generation}: {} rabbits, {averages:?}",
                population.len()
            );

            let flow = hooks.fire(&Stats {
                generation,
                population: &population,
                averages: &averages,
            });
            history.push(GenerationRecord {
                generation,
                population: population.len(),
                averages,
            });

            if flow.is_break() {
                info!("stopped by hook after generation {generation}");
                break;
            }
        }

        info!("finished after {} generations", history.len());
        Ok(history)
    }
}
