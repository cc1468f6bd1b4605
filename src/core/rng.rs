//! Deterministic random number generation for pool assembly.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical draws
//! - **Forkable**: Hand independent branches to sub-recipes
//! - **Context streams**: Independent sequences per assembly stage
//!
//! ## Usage
//!
//! ```
//! use rust_cube::core::PoolRng;
//!
//! let rng = PoolRng::new(42);
//!
//! // Commander shuffling and filler sampling draw from separate streams,
//! // so adding a commander never changes which filler cards are picked.
//! let mut commanders = rng.for_context("commanders");
//! let mut filler = rng.for_context("filler");
//! assert_ne!(commanders.sample_indices(1000, 8), filler.sample_indices(1000, 8));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG injected into every sampling operation.
///
/// Uses ChaCha8 so a seed reproduces a cube exactly across platforms.
#[derive(Clone, Debug)]
pub struct PoolRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl PoolRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG from OS entropy.
    ///
    /// The chosen seed is still recorded, so `seed()` can be logged and the
    /// run replayed with `PoolRng::new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = context_seed(self.seed, context);
        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct indices from `0..len`, uniformly and without
    /// replacement. The returned order is itself random.
    ///
    /// `amount` is clamped to `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        rand::seq::index::sample(&mut self.inner, len, amount).into_vec()
    }
}

/// FNV-1a over the seed and context bytes, then a SplitMix64 finalizer.
fn context_seed(seed: u64, context: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in seed.to_le_bytes().into_iter().chain(context.bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash ^= hash >> 30;
    hash = hash.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    hash ^= hash >> 27;
    hash = hash.wrapping_mul(0x94d0_49bb_1331_11eb);
    hash ^ (hash >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = PoolRng::new(42);
        let mut rng2 = PoolRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.sample_indices(1000, 3), rng2.sample_indices(1000, 3));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = PoolRng::new(1);
        let mut rng2 = PoolRng::new(2);

        assert_ne!(rng1.sample_indices(1000, 10), rng2.sample_indices(1000, 10));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = PoolRng::new(42);
        let mut rng2 = PoolRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), 42);
    }

    #[test]
    fn test_context_is_deterministic() {
        let rng1 = PoolRng::new(42);
        let rng2 = PoolRng::new(42);

        let mut ctx1 = rng1.for_context("filler");
        let mut ctx2 = rng2.for_context("filler");

        for _ in 0..10 {
            assert_eq!(ctx1.sample_indices(1000, 3), ctx2.sample_indices(1000, 3));
        }
    }

    #[test]
    fn test_context_seeds_are_pinned() {
        let rng = PoolRng::new(42);

        assert_eq!(rng.for_context("commanders").seed(), 0xebce_8bcb_2477_9af9);
        assert_eq!(rng.for_context("filler").seed(), 0x8c45_85c8_7edc_8934);
    }

    #[test]
    fn test_sample_indices_distinct_and_clamped() {
        let mut rng = PoolRng::new(7);

        let picked = rng.sample_indices(10, 4);
        assert_eq!(picked.len(), 4);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
        assert!(picked.iter().all(|&i| i < 10));

        let all = rng.sample_indices(3, 99);
        assert_eq!(all.len(), 3);

        assert!(rng.sample_indices(0, 5).is_empty());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = PoolRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        rng.shuffle(&mut data);
        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }
}
