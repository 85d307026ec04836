//! Property-Based Testing
//!
//! TigerStyle: Random operation sequences with invariant checking.
//!
//! # Philosophy
//!
//! Property-based testing generates random operations and verifies that
//! invariants hold after each operation. Driving the generator from a
//! [`RandomStream`] gives:
//! - Deterministic reproduction via a string seed
//! - The same seeds users type in, so a bad seed from the field replays here
//!
//! # Example
//!
//! ```rust
//! use killer_core::dst::{PropertyTest, PropertyTestable};
//! use killer_core::random::RandomStream;
//!
//! /// Seat order around a table; must stay a permutation of `0..n`.
//! struct Seating { seats: Vec<usize> }
//!
//! #[derive(Debug, Clone)]
//! enum SeatingOp { Shuffle, Swap(usize, usize) }
//!
//! impl PropertyTestable for Seating {
//!     type Operation = SeatingOp;
//!
//!     fn generate_operation(&self, rng: &mut RandomStream) -> Self::Operation {
//!         let n = self.seats.len();
//!         match rng.next_index(2) {
//!             0 => SeatingOp::Shuffle,
//!             _ => SeatingOp::Swap(rng.next_index(n), rng.next_index(n)),
//!         }
//!     }
//!
//!     fn apply_operation(&mut self, op: &Self::Operation) {
//!         match op {
//!             SeatingOp::Shuffle => {
//!                 let mut rng = RandomStream::from_seed("table");
//!                 rng.shuffle(&mut self.seats);
//!             }
//!             SeatingOp::Swap(a, b) => self.seats.swap(*a, *b),
//!         }
//!     }
//!
//!     fn check_invariants(&self) -> Result<(), String> {
//!         let mut sorted = self.seats.clone();
//!         sorted.sort_unstable();
//!         if sorted != (0..self.seats.len()).collect::<Vec<_>>() {
//!             return Err(format!("seats {:?} lost a guest", self.seats));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let result = PropertyTest::new("42")
//!     .with_max_operations(500)
//!     .run(Seating { seats: (0..8).collect() });
//! assert!(result.is_success());
//! ```

use std::fmt::Debug;

use crate::constants::DST_PROPERTY_OPERATIONS_COUNT_MAX;
use crate::random::RandomStream;

/// Trait for systems that can be property-tested.
///
/// TigerStyle: Explicit operation generation and invariant checking.
pub trait PropertyTestable {
    /// The type of operations that can be performed.
    type Operation: Debug + Clone;

    /// Generate a random operation based on current state.
    fn generate_operation(&self, rng: &mut RandomStream) -> Self::Operation;

    /// Apply an operation to the state.
    fn apply_operation(&mut self, op: &Self::Operation);

    /// Check that all invariants hold.
    ///
    /// Returns Ok(()) if all invariants pass, Err(message) otherwise.
    fn check_invariants(&self) -> Result<(), String>;

    /// Optional: Describe the current state for debugging.
    fn describe_state(&self) -> String {
        String::from("(state description not implemented)")
    }
}

/// Result of a property test run.
#[derive(Debug)]
pub struct PropertyTestResult {
    /// Number of operations successfully executed
    pub operations_executed: u64,
    /// Seed used for reproduction
    pub seed: String,
    /// Failure details, if any
    pub failure: Option<PropertyTestFailure>,
}

impl PropertyTestResult {
    /// Check if the test passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Check if the test failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Unwrap the result, panicking with details if failed.
    ///
    /// # Panics
    /// Panics if the test failed, with reproduction info.
    pub fn unwrap(self) {
        if let Some(failure) = self.failure {
            panic!(
                "Property test failed!\n\
                 Seed: {:?} (use this to reproduce)\n\
                 Operation #{}: {}\n\
                 Invariant violation: {}\n\
                 State: {}",
                self.seed,
                failure.operation_index,
                failure.operation,
                failure.message,
                failure.state_description
            );
        }
    }
}

/// Details of a property test failure.
#[derive(Debug)]
pub struct PropertyTestFailure {
    /// Index of the failing operation (0-based)
    pub operation_index: u64,
    /// The operation that caused the failure
    pub operation: String,
    /// The invariant violation message
    pub message: String,
    /// Description of the state at failure
    pub state_description: String,
}

/// Property-based test runner.
///
/// TigerStyle:
/// - Deterministic via seed
/// - Explicit operation count limits
/// - Invariant checking after each operation
#[derive(Debug)]
pub struct PropertyTest {
    seed: String,
    max_operations: u64,
    check_invariants_before: bool,
}

impl PropertyTest {
    /// Create a new property test with the given seed.
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            max_operations: 100,
            check_invariants_before: true,
        }
    }

    /// Set the maximum number of operations to run.
    ///
    /// # Panics
    /// Panics if max exceeds `DST_PROPERTY_OPERATIONS_COUNT_MAX`.
    #[must_use]
    pub fn with_max_operations(mut self, max: u64) -> Self {
        assert!(
            max <= DST_PROPERTY_OPERATIONS_COUNT_MAX,
            "max_operations {} exceeds DST_PROPERTY_OPERATIONS_COUNT_MAX {}",
            max,
            DST_PROPERTY_OPERATIONS_COUNT_MAX
        );
        self.max_operations = max;
        self
    }

    /// Disable checking invariants before the first operation.
    #[must_use]
    pub fn skip_initial_invariant_check(mut self) -> Self {
        self.check_invariants_before = false;
        self
    }

    /// Run the property test.
    ///
    /// Generates random operations, applies them, and checks invariants
    /// after each operation. Returns detailed results.
    #[must_use]
    pub fn run<T: PropertyTestable>(self, mut state: T) -> PropertyTestResult {
        let mut rng = RandomStream::from_seed(&self.seed);

        if self.check_invariants_before {
            if let Err(msg) = state.check_invariants() {
                let failure = PropertyTestFailure {
                    operation_index: 0,
                    operation: "(initial state)".to_string(),
                    message: format!("Initial state violates invariants: {msg}"),
                    state_description: state.describe_state(),
                };
                return self.finish(0, Some(failure));
            }
        }

        for i in 0..self.max_operations {
            let op = state.generate_operation(&mut rng);
            state.apply_operation(&op);

            if let Err(message) = state.check_invariants() {
                let failure = PropertyTestFailure {
                    operation_index: i,
                    operation: format!("{op:?}"),
                    message,
                    state_description: state.describe_state(),
                };
                return self.finish(i + 1, Some(failure));
            }
        }

        let executed = self.max_operations;
        self.finish(executed, None)
    }

    fn finish(
        self,
        operations_executed: u64,
        failure: Option<PropertyTestFailure>,
    ) -> PropertyTestResult {
        PropertyTestResult {
            operations_executed,
            seed: self.seed,
            failure,
        }
    }

    /// Run the property test, panicking on failure.
    ///
    /// # Panics
    /// Panics if any invariant is violated.
    pub fn run_and_assert<T: PropertyTestable>(self, state: T) {
        self.run(state).unwrap();
    }
}

/// Run multiple property tests with different seeds.
///
/// # Panics
/// Panics if any test fails.
pub fn run_property_tests<T, F>(seeds: &[String], max_operations: u64, state_factory: F)
where
    T: PropertyTestable,
    F: Fn() -> T,
{
    for seed in seeds {
        PropertyTest::new(seed.clone())
            .with_max_operations(max_operations)
            .run_and_assert(state_factory());
    }
}

/// Generate a set of test seeds including edge cases.
///
/// Returns seeds: ["0", "1", "42", "test", fresh, fresh, ...]. Fresh seeds
/// differ per run and are printed in any failure message.
///
/// # Panics
/// Panics if `count` is below 4.
#[must_use]
pub fn test_seeds(count: usize) -> Vec<String> {
    assert!(count >= 4, "need at least 4 seeds for edge cases");

    let mut seeds: Vec<String> = ["0", "1", "42", "test"].map(String::from).to_vec();
    while seeds.len() < count {
        seeds.push(RandomStream::new(None).used_seed().to_owned());
    }
    seeds
}
