//! Describes how a [`RandomSource`](crate::RandomSource) should be set up.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// The configuration of a [`RandomSource`](crate::RandomSource).
///
/// This is usually loaded from a RON file:
///
/// ```ron
/// (
///     seed: Some(12345),
///     offset: 0,
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// The seed of the sequence.
    ///
    /// When left unset, the current time in milliseconds is used and the resulting sequence is
    /// not reproducible.
    pub seed: Option<i64>,
    /// The position in the sequence at which the first draw happens.
    pub offset: i64,
}

impl SourceConfig {
    /// Creates a configuration for the start of the sequence of `seed`.
    pub const fn seeded(seed: i64) -> Self {
        Self {
            seed: Some(seed),
            offset: 0,
        }
    }

    /// Parses a configuration from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Reads and parses the RON configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        squirrel_log::trace!("loading source configuration from `{}`", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Returns the seed to use, falling back on the current time when none was provided.
    pub fn resolve_seed(&self) -> i64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = squirrel_noise::system::time_millis();
                squirrel_log::info!("no seed configured, seeding from the clock ({seed})");
                seed
            }
        }
    }
}
