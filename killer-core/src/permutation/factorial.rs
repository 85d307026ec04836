//! Memoized arbitrary-precision factorials.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::PERMUTATION_ELEMENTS_COUNT_MAX;
use crate::error::{DomainError, DomainResult};

/// Factorial table, extended on demand.
///
/// `values[k] == k!` for every cached `k`. The table only grows.
#[derive(Debug, Clone)]
pub struct FactorialTable {
    values: Vec<BigUint>,
}

impl FactorialTable {
    /// Create a table holding only `0! = 1`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: vec![BigUint::one()],
        }
    }

    /// Compute `n!`, extending the table as needed.
    ///
    /// # Errors
    /// Returns error if `n` exceeds `PERMUTATION_ELEMENTS_COUNT_MAX`.
    pub fn factorial(&mut self, n: usize) -> DomainResult<&BigUint> {
        self.ensure(n)?;
        Ok(&self.values[n])
    }

    /// Extend the table up to and including `n!`.
    ///
    /// # Errors
    /// Returns error if `n` exceeds `PERMUTATION_ELEMENTS_COUNT_MAX`.
    pub fn ensure(&mut self, n: usize) -> DomainResult<()> {
        if n > PERMUTATION_ELEMENTS_COUNT_MAX {
            return Err(DomainError::PermutationTooLarge {
                n,
                max: PERMUTATION_ELEMENTS_COUNT_MAX,
            });
        }

        while self.values.len() <= n {
            let k = self.values.len();
            let next = &self.values[k - 1] * BigUint::from(k);
            self.values.push(next);
        }

        // Postcondition
        assert!(self.values.len() > n, "table must cover n");
        Ok(())
    }

    /// Look up an already computed factorial.
    ///
    /// # Panics
    /// Panics if `n!` has not been computed yet.
    #[must_use]
    pub fn cached(&self, n: usize) -> &BigUint {
        assert!(n < self.values.len(), "factorial {n} not cached");
        &self.values[n]
    }

    /// Largest `n` whose factorial is cached.
    #[must_use]
    pub fn cached_max(&self) -> usize {
        self.values.len() - 1
    }
}

impl Default for FactorialTable {
    fn default() -> Self {
        Self::new()
    }
}
