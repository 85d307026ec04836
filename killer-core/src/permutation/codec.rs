//! PermutationCodec - index <-> permutation bijection.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::factorial::FactorialTable;
use super::Permutation;
use crate::error::{DomainError, DomainResult};
use crate::random::{sample_below, RandomStream};

/// Reindex a sequence: `result[i] = sequence[permutation[i]]`.
///
/// # Errors
/// Returns error if the lengths differ.
pub fn apply<T: Clone>(sequence: &[T], permutation: &Permutation) -> DomainResult<Vec<T>> {
    if sequence.len() != permutation.len() {
        return Err(DomainError::LengthMismatch {
            sequence_len: sequence.len(),
            permutation_len: permutation.len(),
        });
    }

    Ok(permutation
        .as_slice()
        .iter()
        .map(|&index| sequence[index].clone())
        .collect())
}

/// Encodes and decodes permutations through the factorial number system.
///
/// TigerStyle:
/// - All index arithmetic is arbitrary precision
/// - Factorials are memoized across calls
/// - Decode and encode are exact inverses
#[derive(Debug, Clone, Default)]
pub struct PermutationCodec {
    factorials: FactorialTable,
}

impl PermutationCodec {
    /// Create a codec with an empty factorial cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `n!`, memoized.
    ///
    /// # Errors
    /// Returns error if `n` is beyond the supported permutation size.
    pub fn factorial(&mut self, n: usize) -> DomainResult<&BigUint> {
        self.factorials.factorial(n)
    }

    /// Decode `index` into the permutation of `n` elements it names.
    ///
    /// Digit `k` of the factorial-base expansion picks the `digit`-th value
    /// still unused, so index 0 is the identity and `n! - 1` the reversal.
    ///
    /// # Errors
    /// Returns error if `index >= n!` or `n` is too large.
    pub fn nth_permutation(&mut self, index: &BigUint, n: usize) -> DomainResult<Permutation> {
        self.factorials.ensure(n)?;
        if index >= self.factorials.cached(n) {
            return Err(DomainError::PermutationIndexOutOfRange {
                index: index.to_string(),
                n,
            });
        }

        let mut rest = index.clone();
        let mut unused: Vec<usize> = (0..n).collect();
        let mut values = Vec::with_capacity(n);

        for k in 0..n {
            let radix = self.factorials.cached(n - 1 - k);
            let digit = (&rest / radix)
                .to_usize()
                .filter(|&d| d < unused.len())
                .ok_or_else(|| DomainError::PermutationIndexOutOfRange {
                    index: index.to_string(),
                    n,
                })?;
            rest %= radix;
            values.push(unused.remove(digit));
        }

        // Postcondition
        assert!(rest.is_zero(), "index must be fully consumed");
        Ok(Permutation::from_vec_unchecked(values))
    }

    /// Encode a permutation back into its index in `[0, n!)`.
    ///
    /// # Errors
    /// Returns error if the permutation is too large.
    pub fn lehmer_index(&mut self, permutation: &Permutation) -> DomainResult<BigUint> {
        let n = permutation.len();
        self.factorials.ensure(n)?;

        let values = permutation.as_slice();
        let mut index = BigUint::zero();
        for (k, &value) in values.iter().enumerate() {
            let digit = values[k + 1..].iter().filter(|&&later| later < value).count();
            if digit > 0 {
                index += self.factorials.cached(n - 1 - k) * BigUint::from(digit);
            }
        }

        // Postcondition
        assert!(index < *self.factorials.cached(n), "index must be below n!");
        Ok(index)
    }

    /// Draw a uniformly random permutation of `n` elements.
    ///
    /// # Errors
    /// Returns error if `n` is too large.
    pub fn random_permutation(
        &mut self,
        rng: &mut RandomStream,
        n: usize,
    ) -> DomainResult<Permutation> {
        self.factorials.ensure(n)?;
        let index = sample_below(rng, self.factorials.cached(n));
        self.nth_permutation(&index, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nth_permutation_known_values() {
        let mut codec = PermutationCodec::new();
        let cases: [(u32, usize, &[usize]); 4] = [
            (0, 4, &[0, 1, 2, 3]),
            (10, 4, &[1, 3, 0, 2]),
            (23, 4, &[3, 2, 1, 0]),
            (5, 3, &[2, 1, 0]),
        ];
        for (index, n, expected) in cases {
            let perm = codec.nth_permutation(&BigUint::from(index), n).unwrap();
            assert_eq!(perm.as_slice(), expected, "index {index} of {n}");
        }
    }

    #[test]
    fn test_bijection_small_n() {
        let mut codec = PermutationCodec::new();
        for n in 0..=6usize {
            let total: u32 = (1..=n as u32).product();
            let mut seen = HashSet::new();
            for i in 0..total {
                let index = BigUint::from(i);
                let perm = codec.nth_permutation(&index, n).unwrap();
                assert_eq!(codec.lehmer_index(&perm).unwrap(), index);
                assert!(seen.insert(perm), "index {i} of {n} decoded twice");
            }
        }
    }

    #[test]
    fn test_index_out_of_range() {
        let mut codec = PermutationCodec::new();
        let err = codec.nth_permutation(&BigUint::from(24u32), 4).unwrap_err();
        assert_eq!(
            err,
            DomainError::PermutationIndexOutOfRange {
                index: "24".to_string(),
                n: 4
            }
        );
    }

    #[test]
    fn test_empty_permutation() {
        let mut codec = PermutationCodec::new();
        let perm = codec.nth_permutation(&BigUint::zero(), 0).unwrap();
        assert!(perm.is_empty());
    }

    #[test]
    fn test_random_permutation_golden() {
        let mut codec = PermutationCodec::new();
        let mut rng = RandomStream::from_seed("test");
        let perm = codec.random_permutation(&mut rng, 4).unwrap();
        assert_eq!(perm.as_slice(), &[1, 0, 3, 2]);
    }

    #[test]
    fn test_random_permutation_large_n() {
        let mut codec = PermutationCodec::new();
        let mut rng = RandomStream::from_seed("test");
        let perm = codec.random_permutation(&mut rng, 30).unwrap();
        assert_eq!(
            perm.as_slice(),
            &[
                8, 5, 11, 22, 9, 23, 16, 6, 21, 24, 18, 15, 4, 19, 27, 12, 29, 26, 17, 3, 1, 14,
                25, 7, 20, 0, 13, 2, 10, 28
            ]
        );
        assert_eq!(rng.draws(), 7);
    }

    #[test]
    fn test_random_permutation_hits_every_arrangement() {
        let mut codec = PermutationCodec::new();
        let mut rng = RandomStream::from_seed("uniform");
        let mut counts = std::collections::HashMap::new();
        for _ in 0..6000 {
            let perm = codec.random_permutation(&mut rng, 3).unwrap();
            *counts.entry(perm).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!((800..1200).contains(&count), "{perm:?} drawn {count} times");
        }
    }

    #[test]
    fn test_apply_reindexes() {
        let perm = Permutation::try_from_vec(vec![2, 0, 1]).unwrap();
        let names = ["A", "B", "C"];
        assert_eq!(apply(&names, &perm).unwrap(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_apply_length_mismatch() {
        let perm = Permutation::identity(2);
        let err = apply(&[1, 2, 3], &perm).unwrap_err();
        assert!(matches!(err, DomainError::LengthMismatch { .. }));
    }
}
