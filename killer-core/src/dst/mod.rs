//! DST - Deterministic Simulation Testing
//!
//! Seeded property testing for the assignment engine.
//!
//! # Philosophy
//!
//! > "If it isn't reproducible from the seed, it isn't a test."
//!
//! # Usage
//!
//! ```rust
//! use killer_core::dst::{run_property_tests, test_seeds, PropertyTestable};
//! ```
//!
//! Failures print the seed. Passing it back to [`PropertyTest::new`] replays
//! the exact operation sequence.

mod property;

pub use property::{
    run_property_tests, test_seeds, PropertyTest, PropertyTestFailure, PropertyTestResult,
    PropertyTestable,
};
