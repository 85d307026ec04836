//! BigIndexSampler - uniform arbitrary-precision integers below a bound.
//!
//! Factorials outgrow every native integer long before a realistic party
//! does, so permutation indices are drawn as `BigUint` from 16-bit chunks of
//! the stream. A candidate with exactly `bit_length(max)` bits is accepted
//! only when it is below `max`; neither modulo nor rescaling is applied, so
//! every value is equally likely. At least half of all candidates are
//! accepted.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::stream::RandomStream;
use crate::constants::{SAMPLER_CHUNK_BITS, SAMPLER_CHUNK_VALUES_COUNT};

/// Draw a uniformly distributed integer in `[0, max)`.
///
/// `max <= 1` always yields zero and leaves the stream untouched.
///
/// # Replaying seeds across implementations
///
/// Seeds are portable at the stream level only: [`hash_seed`] and
/// [`RandomStream`] reproduce the browser generator word for word. A
/// rescaling sampler (`floor(max * raw / 2^bits)`) consumes exactly one
/// candidate per call, whereas this one redraws rejected candidates, so the
/// two diverge from the first rejection on and the same seed yields a
/// different assignment. The browser tool also picks targets player by
/// player rather than through a Lehmer index, so a seed never replays one of
/// its games here; it replays games made by this crate.
///
/// [`hash_seed`]: super::hash_seed
///
/// # Example
/// ```
/// use killer_core::random::{sample_below, RandomStream};
/// use num_bigint::BigUint;
///
/// let mut rng = RandomStream::from_seed("test");
/// let value = sample_below(&mut rng, &BigUint::from(24u32));
/// assert!(value < BigUint::from(24u32));
/// ```
pub fn sample_below(rng: &mut RandomStream, max: &BigUint) -> BigUint {
    if *max <= BigUint::one() {
        return BigUint::zero();
    }

    let bits = max.bits();
    let chunks = (bits + SAMPLER_CHUNK_BITS - 1) / SAMPLER_CHUNK_BITS;

    loop {
        let mut raw = BigUint::zero();
        for _ in 0..chunks {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let chunk = (rng.next_float() * SAMPLER_CHUNK_VALUES_COUNT) as u32;
            raw = (raw << SAMPLER_CHUNK_BITS) | BigUint::from(chunk);
        }
        raw >>= chunks * SAMPLER_CHUNK_BITS - bits;

        if raw < *max {
            return raw;
        }
    }
}
