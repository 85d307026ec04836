//! RandomStream - Seeded Random Number Generator
//!
//! TigerStyle: Mulberry32 stream keyed by a hashed string seed.

use super::seed::{fresh_seed, hash_seed, normalize_seed};
use crate::constants::RANDOM_WORD_SCALE;

/// A deterministic random stream.
///
/// TigerStyle:
/// - Same seed always produces same sequence, on every platform
/// - The seed actually used is always recoverable
/// - All randomness of one assignment flows through this
#[derive(Debug, Clone)]
pub struct RandomStream {
    state: u32,
    used_seed: String,
    /// Number of 32-bit words drawn since the last reset
    draws: u64,
}

impl RandomStream {
    /// Create a stream from an optional seed.
    ///
    /// `None` or an empty string derives a fresh seed, which is then
    /// available through [`RandomStream::used_seed`].
    ///
    /// # Example
    /// ```
    /// use killer_core::random::RandomStream;
    /// let mut rng = RandomStream::new(Some("party"));
    /// let value = rng.next_float();
    /// assert!((0.0..1.0).contains(&value));
    /// ```
    #[must_use]
    pub fn new(seed: Option<&str>) -> Self {
        let used_seed = match normalize_seed(seed) {
            Some(seed) => seed.to_owned(),
            None => fresh_seed(),
        };
        let state = hash_seed(&used_seed)[0];

        Self {
            state,
            used_seed,
            draws: 0,
        }
    }

    /// Create a stream from a fixed seed.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        Self::new(Some(seed))
    }

    /// Restart the stream from an optional seed.
    pub fn reset(&mut self, seed: Option<&str>) {
        *self = Self::new(seed);

        // Postcondition
        assert_eq!(self.draws, 0, "reset must rewind the draw counter");
    }

    /// The seed this stream was keyed with.
    #[must_use]
    pub fn used_seed(&self) -> &str {
        &self.used_seed
    }

    /// Words drawn since the last reset.
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate the next 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        self.draws += 1;
        t ^ (t >> 14)
    }

    /// Generate a random float in [0, 1).
    pub fn next_float(&mut self) -> f64 {
        let value = f64::from(self.next_u32()) / RANDOM_WORD_SCALE;

        // Postcondition
        assert!((0.0..1.0).contains(&value), "float must be in [0, 1)");
        value
    }

    /// Generate an index in [0, max).
    ///
    /// # Panics
    /// Panics if max is zero.
    pub fn next_index(&mut self, max: usize) -> usize {
        // Precondition
        assert!(max > 0, "max must be positive");

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let value = (self.next_float() * max as f64) as usize;

        // Postcondition
        assert!(value < max, "index must be below max");
        value
    }

    /// Shuffle a mutable slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        // Fisher-Yates shuffle
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}
