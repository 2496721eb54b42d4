//! Seeded random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical shuffle sequence
//! - **Seed-visible**: The seed is kept so a surprising round can be replayed
//! - **Entropy-backed**: `from_entropy` picks a fresh seed from the OS
//!
//! ```
//! use hilo_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.index_up_to(20), b.index_up_to(20));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the round engine.
///
/// Uses ChaCha8 for speed while keeping the quality well above what a
/// card shuffle needs.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..=max`.
    pub fn index_up_to(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }

    /// Fisher–Yates shuffle of a slice in place.
    ///
    /// Walks from the last index down to 1, swapping each position with a
    /// uniformly chosen index at or below it.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index_up_to(i);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index_up_to(1000), rng2.index_up_to(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index_up_to(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index_up_to(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut rng = GameRng::new(7);
        for max in 0..30 {
            for _ in 0..20 {
                assert!(rng.index_up_to(max) <= max);
            }
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(3);

        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Every element should be able to land in the first slot.
        let mut rng = GameRng::new(11);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let mut data = [0usize, 1, 2, 3, 4];
            rng.shuffle(&mut data);
            seen[data[0]] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);

        let entropy = GameRng::from_entropy();
        let mut replay = GameRng::new(entropy.seed());
        let mut original = entropy.clone();
        assert_eq!(original.index_up_to(1000), replay.index_up_to(1000));
    }
}
