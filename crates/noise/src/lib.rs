//! Position-addressable noise used as a seekable random stream.
//!
//! The building block is [`noises::squirrel3`], a pure hash from `(position, seed)` to a `u32`.
//! [`rngs::Squirrel3`] wraps it in a cursor that remembers its seed and current offset, so that
//! repeated draws walk the sequence one position at a time.

pub mod noises;
pub mod rngs;
pub mod system;
pub mod utility;

/// The default noise basis.
///
/// Other implementations of [`NoiseBasis`] may be used wherever this one is accepted.
pub type DefaultNoise = rngs::Squirrel3;

/// A seekable, reseedable source of uniform floats.
///
/// # Remarks
///
/// Implementations must be deterministic: the value returned by [`next_f64`] may only depend on
/// the current seed and offset, never on the history of calls that led there.
///
/// [`next_f64`]: NoiseBasis::next_f64
pub trait NoiseBasis {
    /// Replaces the seed of the sequence.
    ///
    /// The current offset is left untouched.
    fn set_seed(&mut self, seed: i64);

    /// Moves the cursor to the provided absolute position.
    fn seek_to(&mut self, offset: i64);

    /// Returns the current position of the cursor.
    fn offset(&self) -> i64;

    /// Returns a float in the range `[0.0, 1.0)` and advances the cursor by one.
    fn next_f64(&mut self) -> f64;
}

impl<B: NoiseBasis + ?Sized> NoiseBasis for &mut B {
    #[inline]
    fn set_seed(&mut self, seed: i64) {
        (**self).set_seed(seed);
    }

    #[inline]
    fn seek_to(&mut self, offset: i64) {
        (**self).seek_to(offset);
    }

    #[inline]
    fn offset(&self) -> i64 {
        (**self).offset()
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// A trait for types that can map an input to a pseudorandom output.
pub trait Noise<I> {
    /// The output of this noise.
    type Output;

    /// Samples the provided input.
    fn sample(&self, input: I) -> Self::Output;
}
