//! Stateful noise cursors.

mod squirrel3;
pub use squirrel3::*;
