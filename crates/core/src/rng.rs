//! Per-grid random stream. Every draw is derived from `next_u64` so runs are
//! reproducible for a given seed.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const UNIT_SCALE: f64 = 1.0 / (1_u64 << 53) as f64;

#[derive(Clone, Debug)]
pub(crate) struct GenRng {
    inner: ChaCha8Rng,
}

impl GenRng {
    pub(crate) fn seeded(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub(crate) fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((u128::from(self.inner.next_u64()) * len as u128) >> 64) as usize
    }

    /// Uniform draw from `(0, 1]`, so `chance(0.0)` never fires and
    /// `chance(1.0)` always does.
    pub(crate) fn unit(&mut self) -> f64 {
        ((self.inner.next_u64() >> 11) + 1) as f64 * UNIT_SCALE
    }

    pub(crate) fn chance(&mut self, probability: f64) -> bool {
        self.unit() <= probability
    }

    pub(crate) fn shuffle<T>(&mut self, items: &mut [T]) {
        for upper in (1..items.len()).rev() {
            let swap_with = self.index(upper + 1);
            items.swap(upper, swap_with);
        }
    }
}

/// Mix a user seed so that nearby seeds start from unrelated streams.
pub fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
