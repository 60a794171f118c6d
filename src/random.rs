//! Random sources for the simulation. Every stochastic operation in the crate takes its generator
//! as an argument, so a run is reproducible from a seed alone.

use rand::{Rng, RngCore, SeedableRng};
use std::{
    fs::File,
    io::{self, Read},
};

/// Extension for rolling a weighted coin on any generator.
pub trait Happens: RngCore {
    /// True with probability `p`. `p <= 0` never happens, `p >= 1` always does.
    fn happens(&mut self, p: f64) -> bool;
}

impl<T: RngCore> Happens for T {
    fn happens(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }
}

/// wyrand: a tiny, fast generator with a single word of state
#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for WyRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

pub fn seed_urandom() -> io::Result<u64> {
    let mut file = File::open("/dev/urandom")?;
    let mut buffer = [0u8; 8];
    file.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

/// A [WyRng] seeded from the OS. Falls back to the thread generator for a seed where
/// `/dev/urandom` is unavailable.
pub fn default_rng() -> WyRng {
    WyRng::seeded(seed_urandom().unwrap_or_else(|_| rand::rng().next_u64()))
}

/// A generator for an optional seed: deterministic when one is given, OS-seeded otherwise.
pub fn rng_for(seed: Option<u64>) -> WyRng {
    seed.map_or_else(default_rng, WyRng::seeded)
}
