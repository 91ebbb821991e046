use serde::{Deserialize, Serialize};

use crate::Noise;

/// The first bit-noise constant. Multiplied into the position.
pub const BIT_NOISE1: u32 = 0xB529_7A4D;
/// The second bit-noise constant. Added after the first shift.
pub const BIT_NOISE2: u32 = 0x68E3_1DA4;
/// The third bit-noise constant. Multiplied in after the second shift.
pub const BIT_NOISE3: u32 = 0x1B56_C4E9;

/// Hashes `position` under `seed`.
///
/// This is the "Squirrel3" noise function presented by Squirrel Eiserloh at GDC 2017. Every
/// step wraps on overflow; the exact bit pattern of the result is part of the contract of this
/// function and must not change.
#[inline]
pub fn squirrel3(position: u32, seed: u32) -> u32 {
    let mut v = position;
    v = v.wrapping_mul(BIT_NOISE1);
    v = v.wrapping_add(seed);
    v ^= v >> 8;
    v = v.wrapping_add(BIT_NOISE2);
    v ^= v << 8;
    v = v.wrapping_mul(BIT_NOISE3);
    v ^= v >> 8;
    v
}

/// The Squirrel3 hash bound to a fixed seed.
///
/// Unlike [`Squirrel3`](crate::rngs::Squirrel3), this has no cursor: sampling a position never
/// changes anything, which makes it usable from shared references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Squirrel3Noise {
    /// The seed mixed into every sampled position.
    ///
    /// Only the low 32 bits take part in the hash.
    pub seed: i64,
}

impl Squirrel3Noise {
    /// Creates a new [`Squirrel3Noise`] with the provided seed.
    #[inline]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Samples `position` and normalizes the result to `[0.0, 1.0)`.
    #[inline]
    pub fn sample_f64(&self, position: i64) -> f64 {
        crate::utility::f64_from_squirrel(self.sample(position))
    }
}

impl Noise<i64> for Squirrel3Noise {
    type Output = u32;

    #[inline]
    fn sample(&self, position: i64) -> u32 {
        // Truncation is intended: both inputs are taken modulo 2^32.
        squirrel3(position as u32, self.seed as u32)
    }
}
