//! Killer Core - Secret Target Assignment
//!
//! TigerStyle seed-reproducible target assignment for "who is your target"
//! party games.
//!
//! # Philosophy
//!
//! > "Same seed, same names, same game."
//!
//! Every assignment is a pure function of the seed, the participant order
//! and the round count:
//! 1. The seed string is hashed into a 32-bit stream
//! 2. Permutations are drawn by Lehmer index, with arbitrary precision
//! 3. Each round is a single cycle through all participants
//! 4. Failures are typed and reproducible
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Session                      │
//! ├─────────────────────────────────────────────┤
//! │  CycleAssigner        │ Round 1 + round 2    │
//! │  PermutationCodec     │ Lehmer codes, n!     │
//! │  sample_below         │ Uniform BigUint      │
//! │  RandomStream         │ cyrb128 + Mulberry32 │
//! ├─────────────────────────────────────────────┤
//! │  DST Framework        │ Seeded properties    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use killer_core::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::new().with_seed("friday"));
//! let mut assignment = session
//!     .generate(&["Ann", "Ben", "Cid", "Dan", "Eve", "Fay", "Gus"], 2)
//!     .unwrap();
//!
//! for (name, targets) in assignment.reveal_all().unwrap() {
//!     assert_eq!(targets.len(), 2);
//!     assert!(!targets.contains(&name));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assignment;
pub mod config;
pub mod constants;
pub mod dst;
pub mod error;
pub mod permutation;
pub mod random;
pub mod session;
pub mod telemetry;

// Re-export common types
pub use assignment::{
    is_compatible, CompatibilitySearch, CycleAssigner, Participant, ParticipantId, Roster,
};
pub use config::SessionConfig;
pub use constants::*;
pub use dst::{
    run_property_tests, test_seeds, PropertyTest, PropertyTestFailure, PropertyTestResult,
    PropertyTestable,
};
pub use error::{AssignError, AssignResult, AssignmentError, DomainError, DomainResult};
pub use permutation::{apply, FactorialTable, Permutation, PermutationCodec};
pub use random::{sample_below, RandomStream};
pub use session::{Assignment, Session};
pub use telemetry::{init_tracing, TelemetryConfig, TelemetryError};
