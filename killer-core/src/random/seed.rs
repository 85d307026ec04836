//! Seed hashing and fresh seed generation.

use rand::Rng;

use crate::constants::{SEED_AUTO_LENGTH_CHARS, SEED_AUTO_RADIX};

const SEED_ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Hash a seed string into four 32-bit words (cyrb128).
///
/// The input is walked as UTF-16 code units so seeds typed into a browser
/// build hash to the same words here.
#[must_use]
pub fn hash_seed(seed: &str) -> [u32; 4] {
    let mut h1: u32 = 1_779_033_703;
    let mut h2: u32 = 3_144_134_277;
    let mut h3: u32 = 1_013_904_242;
    let mut h4: u32 = 2_773_480_762;

    for unit in seed.encode_utf16() {
        let k = u32::from(unit);
        h1 = h2 ^ (h1 ^ k).wrapping_mul(597_399_067);
        h2 = h3 ^ (h2 ^ k).wrapping_mul(2_869_860_233);
        h3 = h4 ^ (h3 ^ k).wrapping_mul(951_274_213);
        h4 = h1 ^ (h4 ^ k).wrapping_mul(2_716_044_179);
    }

    h1 = (h3 ^ (h1 >> 18)).wrapping_mul(597_399_067);
    h2 = (h4 ^ (h2 >> 22)).wrapping_mul(2_869_860_233);
    h3 = (h1 ^ (h3 >> 17)).wrapping_mul(951_274_213);
    h4 = (h2 ^ (h4 >> 19)).wrapping_mul(2_716_044_179);

    h1 ^= h2 ^ h3 ^ h4;
    h2 ^= h1;
    h3 ^= h1;
    h4 ^= h1;

    [h1, h2, h3, h4]
}

/// Generate a fresh base-32 seed from the thread RNG.
///
/// Used when the caller did not supply a seed. The result is remembered by
/// the stream so it can be shown and re-entered later.
#[must_use]
pub fn fresh_seed() -> String {
    let mut rng = rand::thread_rng();
    let seed: String = (0..SEED_AUTO_LENGTH_CHARS)
        .map(|_| char::from(SEED_ALPHABET[rng.gen_range(0..SEED_AUTO_RADIX as usize)]))
        .collect();

    // Postcondition
    assert_eq!(seed.len(), SEED_AUTO_LENGTH_CHARS, "seed must have fixed length");
    seed
}

/// Normalize a caller-supplied seed: empty means "none".
#[must_use]
pub fn normalize_seed(seed: Option<&str>) -> Option<&str> {
    seed.filter(|s| !s.is_empty())
}
