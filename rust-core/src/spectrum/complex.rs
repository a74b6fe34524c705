//! Complex helpers shared by the spectral stages
//!
//! Arithmetic (add, sub, mul) and magnitude come from `num_complex`;
//! this module adds the conversions the pipeline needs at its edges.

use num_complex::Complex64;

/// Floor added before taking the log of a magnitude
pub const LOG_FLOOR: f64 = 1e-6;

/// Promote a real sequence to complex with zero imaginary parts
pub fn promote(real: &[f64]) -> Vec<Complex64> {
    real.iter().map(|&x| Complex64::new(x, 0.0)).collect()
}

/// Natural log of a non-negative real, floored to stay finite at zero
#[inline]
pub fn ln_floored(value: f64) -> f64 {
    (value + LOG_FLOOR).ln()
}

/// Polar to rectangular: (r·cos φ, r·sin φ)
#[inline]
pub fn rect(r: f64, phi: f64) -> Complex64 {
    Complex64::from_polar(r, phi)
}

/// Real parts of a complex sequence
pub fn real_parts(values: &[Complex64]) -> Vec<f64> {
    values.iter().map(|c| c.re).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rect() {
        let c = rect(2.0, PI / 2.0);
        assert!(c.re.abs() < 1e-12);
        assert!((c.im - 2.0).abs() < 1e-12);

        let c = rect(1.5, 0.0);
        assert_eq!(c, Complex64::new(1.5, 0.0));
    }

    #[test]
    fn test_ln_floored_is_finite_at_zero() {
        let v = ln_floored(0.0);
        assert!(v.is_finite());
        assert!((v - LOG_FLOOR.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_complex_log_matches_polar_form() {
        let c = Complex64::new(-1.0, 1.0);
        let l = c.ln();
        assert!((l.re - c.norm().ln()).abs() < 1e-12);
        assert!((l.im - c.im.atan2(c.re)).abs() < 1e-12);
    }

    #[test]
    fn test_promote() {
        let c = promote(&[1.0, -2.0]);
        assert_eq!(c, vec![Complex64::new(1.0, 0.0), Complex64::new(-2.0, 0.0)]);
        assert_eq!(real_parts(&c), vec![1.0, -2.0]);
    }
}
