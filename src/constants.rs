//! Centralized constants for rabbit evolution parameters.
//!
//! All tunable numbers are defined here with the `RABBITS_` prefix, so that the fitness,
//! seeding and mutation code never carries a bare literal.

// ============================================================================
// Trait Seeding Ranges
// ============================================================================

/// Range a freshly seeded rabbit's size is drawn from
pub const RABBITS_SEED_SIZE: (f64, f64) = (1.0, 10.0);

/// Range a freshly seeded rabbit's speed is drawn from
pub const RABBITS_SEED_SPEED: (f64, f64) = (1.0, 10.0);

/// Range a freshly seeded rabbit's camouflage is drawn from
pub const RABBITS_SEED_CAMOUFLAGE: (f64, f64) = (0.0, 1.0);

/// Range a freshly seeded rabbit's reproductive rate is drawn from
pub const RABBITS_SEED_REPRODUCTIVE_RATE: (f64, f64) = (1.0, 5.0);

// ============================================================================
// Trait Bounds
// ============================================================================

/// Lower bound of every unbounded trait (size, speed, reproductive rate)
pub const RABBITS_TRAIT_FLOOR: f64 = 1.0;

/// Bounds camouflage is clamped into after mutation
pub const RABBITS_CAMOUFLAGE_BOUNDS: (f64, f64) = (0.0, 1.0);

// ============================================================================
// Mutation Parameters
// ============================================================================

/// Half-width of the uniform offset applied to a mutating camouflage
pub const RABBITS_CAMOUFLAGE_PERTURB: f64 = 0.1;

/// Half-width of the uniform offset applied to every other mutating trait
pub const RABBITS_TRAIT_PERTURB: f64 = 1.0;

// ============================================================================
// Fitness Parameters
// ============================================================================

/// Food a rabbit needs per unit of size
pub const RABBITS_FOOD_PER_SIZE: f64 = 0.5;

// ============================================================================
// Run Defaults
// ============================================================================

pub const RABBITS_DEFAULT_POPULATION: usize = 20;

pub const RABBITS_DEFAULT_GENERATIONS: usize = 50;

pub const RABBITS_DEFAULT_MUTATION_RATE: f64 = 0.1;

pub const RABBITS_DEFAULT_FOOD_AVAILABILITY: f64 = 0.5;

pub const RABBITS_DEFAULT_PREDATOR_PRESSURE: f64 = 5.0;
