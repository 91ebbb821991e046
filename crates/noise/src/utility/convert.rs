/// The reference magnitude used to normalize hash outputs, `-(2^31)`.
const MAX_VALUE: f64 = -2_147_483_648.0;

/// Converts a hash output into a `f64` value in the range `[0.0, 1.0)`.
///
/// The input is reinterpreted as an `i32` and mapped through `(v / -(2^31) + 1) / 2`. Every step
/// is exact in `f64`, so results are bit-for-bit reproducible on any platform.
///
/// # Remarks
///
/// That mapping sends `i32::MIN` to exactly `1.0`. This single value is folded back onto `0.0`
/// to keep the upper bound exclusive, so for that one input the result differs from the plain
/// formula (and from other implementations of it, which return `1.0`). Every other input
/// matches the formula bit for bit.
#[inline]
pub fn f64_from_squirrel(x: u32) -> f64 {
    let v = x as i32;
    if v == i32::MIN {
        return 0.0;
    }
    (v as f64 / MAX_VALUE + 1.0) / 2.0
}

/// Returns the largest `i64` value that is less than or equal to `x`.
///
/// Values outside of the range of `i64` saturate, and NaN maps to zero.
#[inline]
pub fn floor_i64(x: f64) -> i64 {
    x.floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_points() {
        assert_eq!(f64_from_squirrel(0), 0.5);
        assert_eq!(f64_from_squirrel(0xBFF3_BD84), 0.750187068246305);
        assert_eq!(f64_from_squirrel(i32::MAX as u32), 0.5 / 2_147_483_648.0);
    }

    #[test]
    fn upper_bound_is_exclusive() {
        assert_eq!(f64_from_squirrel(i32::MIN as u32), 0.0);
        assert!(f64_from_squirrel(i32::MIN as u32 + 1) < 1.0);
    }

    #[test]
    fn floor_rounds_towards_negative_infinity() {
        assert_eq!(floor_i64(2.9), 2);
        assert_eq!(floor_i64(-0.1), -1);
        assert_eq!(floor_i64(-3.0), -3);
    }
}
