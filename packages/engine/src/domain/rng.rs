//! Deterministic randomness for role dealing and AI decisions.
//!
//! Every engine owns exactly one [`GameRng`]. Seeded engines replay the same
//! deal and the same AI choices for the same sequence of human inputs.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Seeded when `seed` is given, otherwise drawn from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { inner }
    }

    /// Fisher-Yates shuffle of a copy of `items`.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        out.shuffle(&mut self.inner);
        out
    }

    /// Uniform pick; `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Bernoulli trial with success probability `p` (clamped to 0..=1).
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.random_bool(p.clamp(0.0, 1.0))
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRng").finish_non_exhaustive()
    }
}
