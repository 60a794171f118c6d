use crate::{constants::RABBITS_FOOD_PER_SIZE, Environment, Organism};

/// How likely a rabbit is to survive and breed in `env`. Never negative.
///
/// Predation risk grows as a rabbit gets slower or less camouflaged, and a bigger rabbit needs
/// more of the available food. A rabbit whose risk outweighs its share of food scores 0.
pub fn fitness(rabbit: &Organism, env: &Environment) -> f64 {
    let predation_risk = (1. - rabbit.camouflage) * (1. / rabbit.speed);
    let food_requirement = rabbit.size * RABBITS_FOOD_PER_SIZE;
    let survival_chance = env.food_availability / food_requirement - predation_risk;
    survival_chance.max(0.) * rabbit.reproductive_rate
}
