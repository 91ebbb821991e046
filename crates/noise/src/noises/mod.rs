//! Stateless noise functions.

mod squirrel3;
pub use squirrel3::*;
