//! Frame windowing
//!
//! Applies precomputed window coefficients to time-domain frames before FFT

use crate::filters::windows::{generate_window, WindowType};

/// Window coefficients computed once and shared by every frame
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    window_type: WindowType,
    coefficients: Vec<f64>,
}

impl Window {
    pub fn new(window_type: WindowType, length: usize) -> Self {
        Self {
            window_type,
            coefficients: generate_window(window_type, length),
        }
    }

    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Multiply `frame` by the window into `out`
    ///
    /// Only the overlapping prefix of the three slices is written.
    pub fn apply_into(&self, frame: &[f64], out: &mut [f64]) {
        for ((o, &s), &w) in out.iter_mut().zip(frame).zip(&self.coefficients) {
            *o = s * w;
        }
    }
}

/// Apply window to signal
///
/// # Returns
/// Windowed signal
pub fn apply_window(signal: &[f64], window: &Window) -> Vec<f64> {
    signal
        .iter()
        .zip(window.coefficients())
        .map(|(&s, &w)| s * w)
        .collect()
}
