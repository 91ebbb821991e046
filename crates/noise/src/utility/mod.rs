//! Utility functions to work with random numbers.

mod convert;
pub use convert::*;

mod inv_erf;
pub use inv_erf::*;
