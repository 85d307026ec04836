//! Random - Seeded Streams and Big Index Sampling
//!
//! TigerStyle: One explicit stream per generate action, passed by `&mut`.
//! No global generator state.
//!
//! # Example
//!
//! ```rust
//! use killer_core::random::{sample_below, RandomStream};
//! use num_bigint::BigUint;
//!
//! let mut rng = RandomStream::from_seed("friday night");
//! let index = sample_below(&mut rng, &BigUint::from(120u32));
//! assert!(index < BigUint::from(120u32));
//! assert_eq!(rng.used_seed(), "friday night");
//! ```

mod sampler;
mod seed;
mod stream;

pub use sampler::sample_below;
pub use seed::{fresh_seed, hash_seed, normalize_seed};
pub use stream::RandomStream;
