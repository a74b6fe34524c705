//! Analysis window functions
//!
//! All windows are periodic (denominator N, not N-1) so that frames
//! overlapped by N/2 sum to a constant for the raised-cosine family.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/N)
    #[default]
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/N)
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/N) + 0.08*cos(4πn/N)
    Blackman,

    /// Rectangular window (no windowing)
    Rectangular,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    let n_len = length as f64;

    match window_type {
        WindowType::Hann => (0..length)
            .map(|n| 0.5 - 0.5 * (2.0 * PI * n as f64 / n_len).cos())
            .collect(),

        WindowType::Hamming => (0..length)
            .map(|n| 0.54 - 0.46 * (2.0 * PI * n as f64 / n_len).cos())
            .collect(),

        WindowType::Blackman => (0..length)
            .map(|n| {
                let angle = 2.0 * PI * n as f64 / n_len;
                0.42 - 0.5 * angle.cos() + 0.08 * (2.0 * angle).cos()
            })
            .collect(),

        WindowType::Rectangular => vec![1.0; length],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hann_matches_formula() {
        let n = 2048;
        let hann = generate_window(WindowType::Hann, n);

        assert_eq!(hann.len(), n);
        for (i, &w) in hann.iter().enumerate() {
            let expected = 0.5 - 0.5 * (2.0 * PI * i as f64 / n as f64).cos();
            assert_eq!(w, expected);
        }
    }

    #[test]
    fn test_periodic_shape() {
        let n = 16;
        let hann = generate_window(WindowType::Hann, n);

        // Periodic: zero at start, peak at N/2, last sample not zero
        assert_eq!(hann[0], 0.0);
        assert!((hann[n / 2] - 1.0).abs() < 1e-12);
        assert!(hann[n - 1] > 0.0);

        // Symmetric about N/2
        for i in 1..n / 2 {
            assert!((hann[i] - hann[n - i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_sums() {
        let n = 1024;
        for (window_type, gain) in [
            (WindowType::Hann, 0.5),
            (WindowType::Hamming, 0.54),
            (WindowType::Blackman, 0.42),
            (WindowType::Rectangular, 1.0),
        ] {
            let sum: f64 = generate_window(window_type, n).iter().sum();
            let expected = gain * n as f64;
            assert!((sum - expected).abs() < 1e-9, "{:?}: {} vs {}", window_type, sum, expected);
        }
    }

    #[test]
    fn test_hann_half_overlap_sums_to_one() {
        let n = 64;
        let hann = generate_window(WindowType::Hann, n);
        for i in 0..n / 2 {
            assert!((hann[i] + hann[i + n / 2] - 1.0).abs() < 1e-12);
        }
    }
}
