use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use squirrel_noise::{utility, DefaultNoise, NoiseBasis};

use crate::{Error, Result, SourceConfig};

/// The largest integer that an `f64` represents exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// The mean used by [`RandomSource::default_normal`].
pub const DEFAULT_MEAN: f64 = 0.5;

/// The deviation used by [`RandomSource::default_normal`].
pub const DEFAULT_DEVIATION: f64 = 1.0;

/// A seekable random source.
///
/// Wraps a [`NoiseBasis`] and derives common distributions from it. Every distribution consumes
/// exactly one draw from the basis, so the position of the stream always tells how many values
/// were produced.
///
/// # Saved positions
///
/// [`seek_to`] remembers where the stream was before jumping, and [`seek_return`] goes back to
/// it. Saved positions form a stack, which allows nested code to borrow the stream at an
/// arbitrary position and hand it back untouched.
///
/// [`seek_to`]: RandomSource::seek_to
/// [`seek_return`]: RandomSource::seek_return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomSource<B = DefaultNoise> {
    basis: B,
    position_stack: Vec<i64>,
}

impl RandomSource {
    /// Creates a new [`RandomSource`] at the start of the sequence for `seed`.
    pub fn new(seed: i64) -> Self {
        Self::with_basis(DefaultNoise::new(seed))
    }

    /// Creates a new [`RandomSource`] seeded with the current time.
    ///
    /// Reserve this for application entry points; anything that must be reproducible should take
    /// an explicit seed instead.
    pub fn from_time() -> Self {
        let basis = DefaultNoise::from_time();
        squirrel_log::info!("seeding random source from the clock ({})", basis.seed());
        Self::with_basis(basis)
    }

    /// Creates a new [`RandomSource`] from the provided configuration.
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::with_basis(DefaultNoise::with_offset(
            config.resolve_seed(),
            config.offset,
        ))
    }
}

impl<B: NoiseBasis> RandomSource<B> {
    /// Creates a new [`RandomSource`] drawing from `basis`.
    ///
    /// The basis is used as-is: its seed and offset are not reset.
    pub fn with_basis(basis: B) -> Self {
        Self {
            basis,
            position_stack: Vec::new(),
        }
    }

    /// Returns a shared reference to the underlying basis.
    #[inline]
    pub fn basis(&self) -> &B {
        &self.basis
    }

    /// Returns an exclusive reference to the underlying basis.
    ///
    /// Moving the basis directly does not touch the saved positions.
    #[inline]
    pub fn basis_mut(&mut self) -> &mut B {
        &mut self.basis
    }

    /// Consumes this [`RandomSource`] and returns the underlying basis.
    #[inline]
    pub fn into_basis(self) -> B {
        self.basis
    }

    /// Returns the current position in the stream.
    #[inline]
    pub fn offset(&self) -> i64 {
        self.basis.offset()
    }

    /// Returns the number of saved positions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.position_stack.len()
    }

    /// Switches to the sequence of `seed` and rewinds to its start.
    ///
    /// # Remarks
    ///
    /// Saved positions are discarded as well. They refer to the sequence of the previous seed and
    /// returning to one of them afterwards would land at a meaningless place.
    pub fn reseed(&mut self, seed: i64) {
        squirrel_log::trace!(
            "reseeding with {seed} (dropping {} saved positions)",
            self.position_stack.len()
        );

        self.basis.set_seed(seed);
        self.basis.seek_to(0);
        self.position_stack.clear();
    }

    /// Saves the current position, then jumps to `position`.
    ///
    /// The saved position can later be restored with [`seek_return`](Self::seek_return).
    pub fn seek_to(&mut self, position: i64) {
        let current = self.basis.offset();
        squirrel_log::trace!("seeking from {current} to {position}");
        self.position_stack.push(current);
        self.basis.seek_to(position);
    }

    /// Goes back to the most recently saved position.
    ///
    /// Does nothing if no position was saved.
    pub fn seek_return(&mut self) {
        match self.position_stack.pop() {
            Some(position) => {
                squirrel_log::trace!("returning to {position}");
                self.basis.seek_to(position);
            }
            None => squirrel_log::trace!("no saved position to return to"),
        }
    }

    /// Returns a float in the range `[0.0, 1.0)`.
    #[inline]
    pub fn float(&mut self) -> f64 {
        self.basis.next_f64()
    }

    /// Returns `true` with a probability of `odds`.
    ///
    /// Odds below `0.0` always yield `false`; odds of `1.0` or more always yield `true`.
    #[inline]
    pub fn bool(&mut self, odds: f64) -> bool {
        self.float() < odds
    }

    /// Returns `true` or `false` with even odds.
    #[inline]
    pub fn coin_flip(&mut self) -> bool {
        self.bool(0.5)
    }

    /// Samples an approximately normal distribution.
    ///
    /// The single uniform draw is passed through an approximation of the inverse of the normal
    /// CDF, built on [`inv_erf`](utility::inv_erf).
    ///
    /// # Remarks
    ///
    /// A draw of exactly `0.0` maps to negative infinity.
    pub fn normal(&mut self, mean: f64, deviation: f64) -> f64 {
        let x = self.float();
        mean + deviation * std::f64::consts::SQRT_2 * utility::inv_erf(x * 2.0 - 1.0)
    }

    /// Samples [`normal`](Self::normal) with [`DEFAULT_MEAN`] and [`DEFAULT_DEVIATION`].
    #[inline]
    pub fn default_normal(&mut self) -> f64 {
        self.normal(DEFAULT_MEAN, DEFAULT_DEVIATION)
    }

    /// Returns an integer in the range `[0, MAX_SAFE_INTEGER)`.
    #[inline]
    pub fn integer(&mut self) -> i64 {
        self.integer_range(0, MAX_SAFE_INTEGER)
    }

    /// Returns an integer in the range `[0, max)`.
    ///
    /// See [`integer_range`](Self::integer_range) for degenerate bounds.
    #[inline]
    pub fn integer_below(&mut self, max: i64) -> i64 {
        self.integer_range(0, max)
    }

    /// Returns an integer in the range `[min, max)`.
    ///
    /// # Remarks
    ///
    /// Bounds are not validated. When `max <= min` the result is still
    /// `floor(draw * (max - min) + min)`, which lies in `(max, min]`. Use
    /// [`checked_integer_range`](Self::checked_integer_range) to reject such ranges instead.
    ///
    /// The arithmetic is done in `f64`, so bounds beyond [`MAX_SAFE_INTEGER`] in magnitude are
    /// rounded and the result may fall outside of `[min, max)`.
    pub fn integer_range(&mut self, min: i64, max: i64) -> i64 {
        let (min, max) = (min as f64, max as f64);
        utility::floor_i64(self.float() * (max - min) + min)
    }

    /// Returns an integer in the range `[min, max)`, or an error if the range is empty.
    ///
    /// Nothing is drawn when the range is rejected.
    ///
    /// Unlike [`integer_range`](Self::integer_range), the result is computed as an offset from
    /// `min`, so it stays within the range for any pair of `i64` bounds.
    pub fn checked_integer_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if max <= min {
            return Err(Error::InvalidRange { min, max });
        }

        let width = max as i128 - min as i128;
        // Rounding `width` to `f64` may push the product up to `width` itself.
        let step = ((self.float() * width as f64).floor() as i128).min(width - 1);
        Ok((min as i128 + step) as i64)
    }

    /// Returns a random index into `items`.
    ///
    /// Nothing is drawn when `items` is empty.
    pub fn array_index<T>(&mut self, items: &[T]) -> Result<usize> {
        if items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        Ok(self.index_below(items.len()))
    }

    /// Returns a random item of `items`.
    pub fn array_item<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let index = self.array_index(items)?;
        Ok(&items[index])
    }

    /// Returns a random character of `text`.
    ///
    /// Each `char` has the same chance of being picked, regardless of its encoded length.
    pub fn char_item(&mut self, text: &str) -> Result<char> {
        let count = text.chars().count();
        if count == 0 {
            return Err(Error::EmptyCollection);
        }
        let index = self.index_below(count);
        text.chars().nth(index).ok_or(Error::EmptyCollection)
    }

    /// Draws an index in `[0, len)` for a non-empty collection.
    fn index_below(&mut self, len: usize) -> usize {
        (self.integer_below(len as i64) as usize).min(len - 1)
    }
}

impl<B: NoiseBasis + Serialize> RandomSource<B> {
    /// Saves the basis and the saved positions as RON text.
    pub fn snapshot(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}

impl<B: NoiseBasis + DeserializeOwned> RandomSource<B> {
    /// Restores a [`RandomSource`] from a [`snapshot`](Self::snapshot).
    pub fn restore(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }
}
