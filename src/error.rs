use std::io;

/// An error that might occur when drawing from or configuring a
/// [`RandomSource`](crate::RandomSource).
///
/// Numeric edge cases of the noise itself never produce errors. Only the operations that would
/// otherwise hand out an unusable value (an index into nothing, an empty range) do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An item was requested from an empty collection.
    #[error("cannot select an item from an empty collection")]
    EmptyCollection,
    /// An integer range whose upper bound is not above its lower bound.
    #[error("invalid integer range [{min}, {max})")]
    InvalidRange {
        /// The inclusive lower bound.
        min: i64,
        /// The exclusive upper bound.
        max: i64,
    },
    /// An I/O error occured.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A configuration or a saved state could not be parsed.
    #[error("failed to parse: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// A saved state could not be written.
    #[error("failed to serialize: {0}")]
    Serialize(#[from] ron::Error),
}

/// A specialized [`Result`](std::result::Result) type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
