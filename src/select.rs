//! Fitness-proportional ("roulette wheel") selection.

use crate::{fitness::fitness, Environment, EvolutionError, Organism, Population};
use rand::{distr::weighted::WeightedIndex, Rng};
use rand_distr::Distribution;

/// Fitness of every member of `population`, in order
pub fn scores(population: &[Organism], env: &Environment) -> Vec<f64> {
    population.iter().map(|rabbit| fitness(rabbit, env)).collect()
}

/// Draw `population.len()` rabbits from `population` with replacement, each with probability
/// proportional to its share of the total fitness.
///
/// A non-empty population whose total fitness is zero (or not finite) cannot be weighted and is
/// reported as [EvolutionError::DegenerateFitness] instead of being resampled uniformly.
pub fn select<R: Rng>(
    population: &[Organism],
    env: &Environment,
    rng: &mut R,
) -> Result<Population, EvolutionError> {
    if population.is_empty() {
        return Ok(vec![]);
    }

    let scores = scores(population, env);
    let total = scores.iter().sum::<f64>();
    if !(total.is_finite() && total > 0.) {
        return Err(EvolutionError::DegenerateFitness {
            population: population.len(),
            total,
        });
    }

    let wheel = WeightedIndex::new(&scores)?;
    Ok(wheel
        .sample_iter(rng)
        .take(population.len())
        .map(|idx| population[idx])
        .collect())
}
