//! Assignment - Participants and Target Cycles
//!
//! TigerStyle: Every round is one cycle through the whole roster.
//!
//! # Example
//!
//! ```rust
//! use killer_core::assignment::{CycleAssigner, Roster};
//! use killer_core::random::RandomStream;
//!
//! let mut roster = Roster::from_names(["Ann", "Ben", "Cid"]).unwrap();
//! let mut rng = RandomStream::from_seed("test");
//! CycleAssigner::new().assign(&mut roster, 1, &mut rng).unwrap();
//!
//! let ann = roster.find("Ann").unwrap();
//! assert_ne!(ann.targets()[0], ann.id());
//! ```

mod cycle;
mod participant;

pub use cycle::{is_compatible, validate, CompatibilitySearch, CycleAssigner};
pub use participant::{Participant, ParticipantId, Roster};
