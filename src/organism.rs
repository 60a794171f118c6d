//! Rabbits and the heritable traits they are made of.

use crate::constants::{
    RABBITS_CAMOUFLAGE_BOUNDS, RABBITS_CAMOUFLAGE_PERTURB, RABBITS_SEED_CAMOUFLAGE,
    RABBITS_SEED_REPRODUCTIVE_RATE, RABBITS_SEED_SIZE, RABBITS_SEED_SPEED, RABBITS_TRAIT_FLOOR,
    RABBITS_TRAIT_PERTURB,
};
use core::fmt;
use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

/// A single rabbit. Rabbits have no identity beyond their traits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    pub size: f64,
    pub speed: f64,
    pub camouflage: f64,
    pub reproductive_rate: f64,
}

pub type Population = Vec<Organism>;

macro_rules! count {
    ($_:ident) => {
        1
    };
    ($_:ident, $($remain:ident),+) => {
        1+count!($($remain),+)
    };
}

/// Generates [Trait] with one variant per [Organism] field, along with generic field access so
/// that crossover and mutation can walk every trait without naming them.
macro_rules! impl_traits {
    ($($field:ident: $label:literal),+ $(,)?) => {
        ::paste::paste! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            pub enum Trait {
                $(
                    #[serde(rename = $label)]
                    [<$field:camel>],
                )+
            }

            impl Trait {
                /// Every trait, in field order
                pub const ALL: [Trait; count!($($field),+)] = [$(Self::[<$field:camel>]),+];

                pub const fn name(self) -> &'static str {
                    match self {
                        $(Self::[<$field:camel>] => $label),+
                    }
                }
            }

            impl Organism {
                #[inline]
                pub fn get(&self, t: Trait) -> f64 {
                    match t {
                        $(Trait::[<$field:camel>] => self.$field),+
                    }
                }

                #[inline]
                pub fn get_mut(&mut self, t: Trait) -> &mut f64 {
                    match t {
                        $(Trait::[<$field:camel>] => &mut self.$field),+
                    }
                }
            }
        }
    };
}

impl_traits!(
    size: "size",
    speed: "speed",
    camouflage: "camouflage",
    reproductive_rate: "reproductiveRate",
);

impl Trait {
    /// Closed range a freshly seeded rabbit draws this trait from
    pub const fn seed_range(self) -> (f64, f64) {
        match self {
            Self::Size => RABBITS_SEED_SIZE,
            Self::Speed => RABBITS_SEED_SPEED,
            Self::Camouflage => RABBITS_SEED_CAMOUFLAGE,
            Self::ReproductiveRate => RABBITS_SEED_REPRODUCTIVE_RATE,
        }
    }

    /// Inclusive bounds a mutated value is clamped into. Only camouflage has an upper bound.
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::Camouflage => RABBITS_CAMOUFLAGE_BOUNDS,
            _ => (RABBITS_TRAIT_FLOOR, f64::INFINITY),
        }
    }

    /// Half-width of the uniform offset a mutation adds
    pub const fn perturbation(self) -> f64 {
        match self {
            Self::Camouflage => RABBITS_CAMOUFLAGE_PERTURB,
            _ => RABBITS_TRAIT_PERTURB,
        }
    }

    #[inline]
    pub fn clamp(self, v: f64) -> f64 {
        let (lo, hi) = self.bounds();
        v.clamp(lo, hi)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Organism {
    pub fn new(size: f64, speed: f64, camouflage: f64, reproductive_rate: f64) -> Self {
        Self {
            size,
            speed,
            camouflage,
            reproductive_rate,
        }
    }
}

/// Uniform distribution over rabbits, each trait drawn from its [Trait::seed_range]
#[derive(Debug, Clone, Copy, Default)]
pub struct Seeding;

impl Distribution<Organism> for Seeding {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Organism {
        let mut rabbit = Organism::default();
        for t in Trait::ALL {
            let (lo, hi) = t.seed_range();
            *rabbit.get_mut(t) = rng.random_range(lo..=hi);
        }
        rabbit
    }
}

/// Seed a population of `size` random rabbits
pub fn create_population<R: Rng>(size: usize, rng: &mut R) -> Population {
    Seeding.sample_iter(rng).take(size).collect()
}
