use std::f64::consts::PI;

/// The shape constant of Winitzki's approximation.
const A: f64 = 0.147;

/// Approximates the inverse of the error function.
///
/// This uses the closed form given by Sergei Winitzki, accurate to roughly `2e-3` across the
/// domain. The function is odd and `inv_erf(0.0)` is exactly zero.
///
/// # Remarks
///
/// The domain is the open interval `(-1.0, 1.0)`. At `±1.0` the result diverges to `±inf`, and
/// outside of `[-1.0, 1.0]` it is NaN. No clamping is performed.
pub fn inv_erf(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }

    let ln = (1.0 - x * x).ln();
    let alpha = 2.0 / (PI * A) + ln / 2.0;
    let beta = ln / A;

    x.signum() * ((alpha * alpha - beta).sqrt() - alpha).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn zero_and_symmetry() {
        assert_eq!(inv_erf(0.0), 0.0);
        for &x in &[0.1, 0.5, 0.9, 0.999] {
            assert_eq!(inv_erf(-x), -inv_erf(x));
        }
    }

    #[test]
    fn approximates_reference_values() {
        assert!(close(inv_erf(0.5), 0.476_936_276, 1e-3));
        assert!(close(inv_erf(0.9), 1.163_087_154, 1e-3));
        assert!(close(inv_erf(0.1), 0.088_855_990, 1e-3));
    }

    #[test]
    fn domain_edges() {
        assert_eq!(inv_erf(1.0), f64::INFINITY);
        assert_eq!(inv_erf(-1.0), f64::NEG_INFINITY);
        assert!(inv_erf(1.5).is_nan());
        assert!(inv_erf(f64::NAN).is_nan());
    }
}
