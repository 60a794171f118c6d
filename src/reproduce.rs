//! Functions related to breeding the next generation from a selected parent pool.

use crate::{random::Happens, Organism, Population, Trait};
use log::warn;
use rand::Rng;

/// A child whose every trait in `traits` is taken from either parent with even odds. Traits not
/// listed are inherited from `l`.
pub fn crossover<R: Rng>(l: &Organism, r: &Organism, traits: &[Trait], rng: &mut R) -> Organism {
    let mut child = *l;
    for &t in traits {
        if rng.random_bool(0.5) {
            *child.get_mut(t) = r.get(t);
        }
    }
    child
}

/// Perturb each trait in `traits` with probability `rate`, by a uniform offset within
/// [Trait::perturbation], then clamp it back into [Trait::bounds].
pub fn mutate<R: Rng>(rabbit: &mut Organism, rate: f64, traits: &[Trait], rng: &mut R) {
    for &t in traits {
        if rng.happens(rate) {
            let p = t.perturbation();
            let v = rabbit.get_mut(t);
            *v = t.clamp(*v + rng.random_range(-p..=p));
        }
    }
}

/// Breed consecutive pairs of `selected` into two mutated children each. An odd trailing parent
/// has no partner and leaves no children, so the result holds `2 * (selected.len() / 2)` rabbits.
pub fn reproduce<R: Rng>(
    selected: &[Organism],
    rate: f64,
    traits: &[Trait],
    rng: &mut R,
) -> Population {
    if selected.len() % 2 == 1 {
        warn!(
            "odd parent pool of {}, the last parent is dropped",
            selected.len()
        );
    }

    let mut next = Vec::with_capacity(selected.len() - selected.len() % 2);
    for pair in selected.chunks_exact(2) {
        let (l, r) = (&pair[0], &pair[1]);
        let mut first = crossover(l, r, traits, rng);
        let mut second = crossover(l, r, traits, rng);
        mutate(&mut first, rate, traits, rng);
        mutate(&mut second, rate, traits, rng);
        next.push(first);
        next.push(second);
    }
    next
}
