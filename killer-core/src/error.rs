//! Errors - Domain and Assignment Failures
//!
//! TigerStyle: Static input problems and exhausted searches are different
//! failures. The first is never retried, the second is recoverable by
//! changing the seed, the round count or the participant count.

/// Invalid static input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Round count outside the supported range
    #[error("rounds out of range: {rounds} not in [{min}, {max}]")]
    RoundsOutOfRange {
        /// Requested rounds
        rounds: usize,
        /// Minimum supported rounds
        min: usize,
        /// Maximum supported rounds
        max: usize,
    },

    /// Not enough participants for the requested rounds
    #[error("insufficient participants: {count} given, {required} required")]
    InsufficientParticipants {
        /// Participants given
        count: usize,
        /// Participants required
        required: usize,
    },

    /// Too many participants for one roster
    #[error("too many participants: {count} exceeds max {max}")]
    TooManyParticipants {
        /// Participants given
        count: usize,
        /// Maximum allowed
        max: usize,
    },

    /// A participant name was empty
    #[error("participant name at position {position} is empty")]
    EmptyName {
        /// Position in the name list
        position: usize,
    },

    /// A participant name appeared twice
    #[error("duplicate participant name: {name}")]
    DuplicateName {
        /// The duplicated name
        name: String,
    },

    /// Participant handle does not belong to the roster
    #[error("unknown participant: {id}")]
    UnknownParticipant {
        /// The handle that was not found
        id: usize,
    },

    /// No participant carries this name
    #[error("unknown participant name: {name}")]
    UnknownName {
        /// The name that was not found
        name: String,
    },

    /// Permutation index is not below n!
    #[error("permutation index {index} out of range for {n} elements")]
    PermutationIndexOutOfRange {
        /// Decimal rendering of the index
        index: String,
        /// Number of elements
        n: usize,
    },

    /// Permutation size is beyond what the codec handles
    #[error("permutation of {n} elements exceeds max {max}")]
    PermutationTooLarge {
        /// Requested elements
        n: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Sequence is not a permutation of 0..n
    #[error("invalid permutation: {reason}")]
    InvalidPermutation {
        /// What is wrong with it
        reason: String,
    },

    /// Sequence length does not match permutation length
    #[error("length mismatch: sequence has {sequence_len}, permutation has {permutation_len}")]
    LengthMismatch {
        /// Length of the sequence
        sequence_len: usize,
        /// Length of the permutation
        permutation_len: usize,
    },

    /// Seed string too long
    #[error("seed too long: {len_bytes} bytes exceeds max {max_bytes}")]
    SeedTooLong {
        /// Length of the seed
        len_bytes: usize,
        /// Maximum allowed
        max_bytes: usize,
    },
}

/// A bounded sampling search ran out of attempts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    /// Round-2 compatibility search exhausted its budget
    #[error("no compatible permutation found after {attempts} attempts")]
    NoCompatiblePermutation {
        /// Attempts made before giving up
        attempts: u32,
    },
}

/// Any failure of an assignment entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    /// Invalid input
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Recoverable sampling failure
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}

impl AssignError {
    /// Whether retrying with another seed or group size may succeed.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Assignment(_))
    }
}

/// Result type for static validation.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for assignment entry points.
pub type AssignResult<T> = Result<T, AssignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_message() {
        let err = AssignmentError::NoCompatiblePermutation { attempts: 1000 };
        assert_eq!(
            err.to_string(),
            "no compatible permutation found after 1000 attempts"
        );
    }

    #[test]
    fn test_recoverable_split() {
        let domain: AssignError = DomainError::RoundsOutOfRange {
            rounds: 3,
            min: 1,
            max: 2,
        }
        .into();
        let sampling: AssignError = AssignmentError::NoCompatiblePermutation { attempts: 5 }.into();

        assert!(!domain.is_recoverable());
        assert!(sampling.is_recoverable());
        assert_eq!(domain.to_string(), "rounds out of range: 3 not in [1, 2]");
    }
}
