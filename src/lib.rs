//! A deterministic, seekable random source.
//!
//! [`RandomSource`] draws from a [`NoiseBasis`], by default the Squirrel3 noise cursor of
//! [`squirrel_noise`]. The same seed always produces the same stream, any position of the stream
//! can be jumped to, and positions can be saved and returned to.
//!
//! ```
//! use squirrel_source::RandomSource;
//!
//! let mut rng = RandomSource::new(12345);
//! let first = rng.float();
//!
//! rng.seek_to(1_000);
//! let _far_away = rng.integer_range(10, 20);
//! rng.seek_return();
//!
//! rng.reseed(12345);
//! assert_eq!(rng.float(), first);
//! ```
//!
//! This is not a cryptographic generator.

mod config;
mod error;
mod source;

pub use config::*;
pub use error::*;
pub use source::*;

pub use squirrel_noise::{DefaultNoise, NoiseBasis};
