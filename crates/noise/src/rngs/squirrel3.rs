use serde::{Deserialize, Serialize};

use crate::noises::Squirrel3Noise;
use crate::{utility, Noise, NoiseBasis};

/// A cursor over the [`squirrel3`](crate::noises::squirrel3) noise sequence.
///
/// Every draw hashes the current offset under the current seed, then moves the offset forward by
/// one. Because the hash is stateless, seeking anywhere in the sequence is free and the value at
/// a given `(seed, offset)` pair never depends on how the cursor got there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Squirrel3 {
    seed: i64,
    offset: i64,
}

impl Squirrel3 {
    /// Creates a new cursor at the start of the sequence for `seed`.
    #[inline]
    pub const fn new(seed: i64) -> Self {
        Self::with_offset(seed, 0)
    }

    /// Creates a new cursor at `offset` in the sequence for `seed`.
    #[inline]
    pub const fn with_offset(seed: i64, offset: i64) -> Self {
        Self { seed, offset }
    }

    /// Creates a new cursor seeded with the current time, in milliseconds.
    ///
    /// The resulting sequence is not reproducible. Prefer [`Squirrel3::new`] everywhere except
    /// at the top-level entry point of an application.
    pub fn from_time() -> Self {
        Self::new(crate::system::time_millis())
    }

    /// Creates a new cursor seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::new(crate::system::entropy() as i64)
    }

    /// Returns the current seed.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Returns the raw hash at the current offset, then advances by one.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let ret = Squirrel3Noise::new(self.seed).sample(self.offset);
        self.offset = self.offset.wrapping_add(1);
        ret
    }
}

impl NoiseBasis for Squirrel3 {
    #[inline]
    fn set_seed(&mut self, seed: i64) {
        self.seed = seed;
    }

    #[inline]
    fn seek_to(&mut self, offset: i64) {
        self.offset = offset;
    }

    #[inline]
    fn offset(&self) -> i64 {
        self.offset
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        utility::f64_from_squirrel(self.next_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_draw_for_seed_12345() {
        let mut noise = Squirrel3::new(12345);
        assert_eq!(noise.next_f64(), 0.750187068246305);
        assert_eq!(noise.next_f64(), 0.5141533769201487);
        assert_eq!(noise.offset(), 2);
    }

    #[test]
    fn from_entropy_starts_a_fresh_sequence() {
        let a = Squirrel3::from_entropy();
        let b = Squirrel3::from_entropy();
        assert_eq!(a.offset(), 0);
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn from_time_uses_the_clock() {
        let before = crate::system::time_millis();
        let noise = Squirrel3::from_time();
        assert!(noise.seed() >= before);
        assert_eq!(noise.offset(), 0);
    }

    #[test]
    fn set_seed_keeps_offset() {
        let mut noise = Squirrel3::with_offset(1, 40);
        noise.set_seed(2);
        assert_eq!(noise.seed(), 2);
        assert_eq!(noise.offset(), 40);
    }

    #[test]
    fn seek_is_absolute() {
        let mut noise = Squirrel3::new(1);
        noise.seek_to(5);
        assert_eq!(noise.next_f64(), 0.5913806424941868);
        noise.seek_to(-3);
        assert_eq!(noise.offset(), -3);
    }

    #[test]
    fn offset_wraps_at_the_end_of_i64() {
        let mut noise = Squirrel3::with_offset(0, i64::MAX);
        noise.next_f64();
        assert_eq!(noise.offset(), i64::MIN);
    }

    proptest! {
        #[test]
        fn same_state_same_draw(seed: i64, offset: i64) {
            let mut a = Squirrel3::with_offset(seed, offset);
            let mut b = Squirrel3::new(seed.wrapping_add(1));
            b.next_f64();
            b.set_seed(seed);
            b.seek_to(offset);
            prop_assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }

        #[test]
        fn advances_by_one_per_draw(seed: i64, offset in -1_000_000i64..1_000_000, n in 0usize..256) {
            let mut noise = Squirrel3::with_offset(seed, offset);
            for _ in 0..n {
                let x = noise.next_f64();
                prop_assert!((0.0..1.0).contains(&x));
            }
            prop_assert_eq!(noise.offset(), offset + n as i64);
        }
    }
}
