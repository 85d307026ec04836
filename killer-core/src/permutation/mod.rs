//! Permutation - Lehmer Codes and Uniform Permutations
//!
//! TigerStyle: Permutations are validated once, on construction, and are
//! immutable afterwards.
//!
//! # Design
//!
//! Every permutation of `n` elements has a unique index in `[0, n!)` under
//! the factorial number system. Sampling the index uniformly with
//! [`sample_below`](crate::random::sample_below) samples the permutation
//! uniformly, for any `n`.
//!
//! # Example
//!
//! ```rust
//! use killer_core::permutation::PermutationCodec;
//! use num_bigint::BigUint;
//!
//! let mut codec = PermutationCodec::new();
//! let perm = codec.nth_permutation(&BigUint::from(5u32), 3).unwrap();
//! assert_eq!(perm.as_slice(), &[2, 1, 0]);
//! assert_eq!(codec.lehmer_index(&perm).unwrap(), BigUint::from(5u32));
//! ```

mod codec;
mod factorial;

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

pub use codec::{apply, PermutationCodec};
pub use factorial::FactorialTable;

/// A bijection on `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The identity permutation of `n` elements.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Validate and wrap a sequence.
    ///
    /// # Errors
    /// Returns error unless `values` contains each of `0..values.len()` once.
    pub fn try_from_vec(values: Vec<usize>) -> DomainResult<Self> {
        let n = values.len();
        let mut seen = vec![false; n];
        for &value in &values {
            if value >= n {
                return Err(DomainError::InvalidPermutation {
                    reason: format!("value {value} out of range for {n} elements"),
                });
            }
            if seen[value] {
                return Err(DomainError::InvalidPermutation {
                    reason: format!("value {value} repeated"),
                });
            }
            seen[value] = true;
        }
        Ok(Self(values))
    }

    /// Wrap a sequence already known to be a bijection.
    pub(crate) fn from_vec_unchecked(values: Vec<usize>) -> Self {
        debug_assert!(
            Self::try_from_vec(values.clone()).is_ok(),
            "values must form a permutation"
        );
        Self(values)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the empty permutation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying sequence.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Positions of each value: `inverse[self[i]] == i`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut positions = vec![0; self.0.len()];
        for (position, &value) in self.0.iter().enumerate() {
            positions[value] = position;
        }
        Self(positions)
    }

    /// Value following position `index`, wrapping around.
    #[must_use]
    pub fn cyclic_next(&self, index: usize) -> usize {
        self.0[(index + 1) % self.0.len()]
    }

    /// Reindex this permutation by `other`: `result[i] = self[other[i]]`.
    ///
    /// # Errors
    /// Returns error if the lengths differ.
    pub fn compose(&self, other: &Permutation) -> DomainResult<Permutation> {
        apply(&self.0, other).map(Self)
    }
}

impl std::ops::Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.0[index]
    }
}
