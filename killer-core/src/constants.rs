//! TigerStyle Constants
//!
//! All limits use big-endian naming: CATEGORY_SPECIFICS_UNIT_LIMIT
//! Example: ASSIGNMENT_ATTEMPTS_COUNT_MAX (not MAX_ASSIGNMENT_ATTEMPTS)
//!
//! Every constant includes units in the name:
//! - _COUNT_MAX/MIN for quantity limits
//! - _BITS for bit widths
//! - _FRACTION for ratios in [0, 1]

// =============================================================================
// Assignment Limits
// =============================================================================

/// Maximum number of rounds (targets per participant) in one assignment
pub const ROUNDS_COUNT_MAX: usize = 2;

/// Minimum number of rounds in one assignment
pub const ROUNDS_COUNT_MIN: usize = 1;

/// Minimum number of participants for any assignment
pub const PARTICIPANTS_COUNT_MIN: usize = 2;

/// Maximum number of participants in one roster
pub const PARTICIPANTS_COUNT_MAX: usize = 10_000;

/// Maximum attempts for the round-2 compatibility search
pub const ASSIGNMENT_ATTEMPTS_COUNT_MAX: u32 = 1000;

/// Above this share of the player count, assignments get crowded
pub const TARGETS_FRACTION_DECENT_MAX: f64 = 0.3;

// =============================================================================
// Permutation Limits
// =============================================================================

/// Largest permutation the codec will build or decode
pub const PERMUTATION_ELEMENTS_COUNT_MAX: usize = PARTICIPANTS_COUNT_MAX;

// =============================================================================
// Random Stream
// =============================================================================

/// Width of a single chunk drawn by the big index sampler
pub const SAMPLER_CHUNK_BITS: u64 = 16;

/// Number of distinct values in one sampler chunk
pub const SAMPLER_CHUNK_VALUES_COUNT: f64 = 65_536.0;

/// Scale mapping a 32-bit generator word onto [0, 1)
pub const RANDOM_WORD_SCALE: f64 = 4_294_967_296.0;

/// Length of an auto-generated seed string
pub const SEED_AUTO_LENGTH_CHARS: usize = 11;

/// Radix of auto-generated seed strings
pub const SEED_AUTO_RADIX: u32 = 32;

/// Maximum length of a user supplied seed
pub const SEED_LENGTH_BYTES_MAX: usize = 1024;

// =============================================================================
// Property Testing Limits
// =============================================================================

/// Maximum number of operations in one property test run
pub const DST_PROPERTY_OPERATIONS_COUNT_MAX: u64 = 1_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_limits_valid() {
        assert!(ROUNDS_COUNT_MIN <= ROUNDS_COUNT_MAX);
        assert!(ROUNDS_COUNT_MIN > 0);
    }

    #[test]
    fn test_participant_limits_valid() {
        assert!(PARTICIPANTS_COUNT_MIN < PARTICIPANTS_COUNT_MAX);
        assert!(PARTICIPANTS_COUNT_MIN > ROUNDS_COUNT_MIN);
    }

    #[test]
    fn test_sampler_constants_consistent() {
        assert_eq!(SAMPLER_CHUNK_VALUES_COUNT, (1u64 << SAMPLER_CHUNK_BITS) as f64);
        assert_eq!(RANDOM_WORD_SCALE, (1u64 << 32) as f64);
    }
}
