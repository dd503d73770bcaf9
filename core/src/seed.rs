use std::hash::Hasher;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// The one generator type every draw goes through
pub type WalkRng = ChaCha8Rng;

// FNV-1a 64-bit. Stable across runs and platforms, unlike `DefaultHasher`.
#[derive(Debug)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    pub fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= byte as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

// Hash a seed string down to the u64 the generator is seeded with
pub fn seed_from_str(seed: &str) -> u64 {
    let mut hasher = FnvHasher::new();
    hasher.write(seed.as_bytes());
    hasher.finish()
}

pub fn rng_from_seed(seed: &str) -> WalkRng {
    WalkRng::seed_from_u64(seed_from_str(seed))
}
