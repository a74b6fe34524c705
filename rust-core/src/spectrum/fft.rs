//! Radix-2 FFT engine
//!
//! Iterative Cooley-Tukey transform over a fixed power-of-two size.
//! The inverse reuses the forward pass through the conjugation identity
//! `ifft(X) = conj(fft(conj(X))) / N`.

use crate::config::WindowSize;
use crate::error::{PurifirError, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

/// FFT engine for a fixed transform size
#[derive(Debug, Clone)]
pub struct FftEngine {
    /// FFT size (number of points, power of two)
    fft_size: usize,

    /// Number of butterfly stages, log2(fft_size)
    stages: u32,

    /// Bit-reversal permutation of 0..fft_size
    bit_reversed: Vec<usize>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size, must be a positive power of two
    pub fn new(fft_size: usize) -> Result<Self> {
        Ok(Self::with_size(WindowSize::new(fft_size)?))
    }

    /// Create an engine for an already validated size
    pub fn with_size(size: WindowSize) -> Self {
        let fft_size = size.get();
        let stages = size.log2();
        let bit_reversed = (0..fft_size).map(|i| reverse_bits(i, stages)).collect();

        Self {
            fft_size,
            stages,
            bit_reversed,
        }
    }

    /// Forward transform, unnormalized: X[k] = Σ x[n]·e^(-2πikn/N)
    pub fn transform(&self, input: &[Complex64]) -> Result<Vec<Complex64>> {
        let mut buffer = input.to_vec();
        self.transform_in_place(&mut buffer)?;
        Ok(buffer)
    }

    /// Inverse transform, scaled by 1/N
    pub fn inverse_transform(&self, input: &[Complex64]) -> Result<Vec<Complex64>> {
        let mut buffer = input.to_vec();
        self.inverse_transform_in_place(&mut buffer)?;
        Ok(buffer)
    }

    /// Forward transform in place
    pub fn transform_in_place(&self, buffer: &mut [Complex64]) -> Result<()> {
        self.check_len(buffer.len())?;

        for i in 0..self.fft_size {
            let j = self.bit_reversed[i];
            if j > i {
                buffer.swap(i, j);
            }
        }

        // Stages depend on each other; groups within a stage do not.
        for s in 1..=self.stages {
            let m = 1usize << s;
            let m2 = m >> 1;
            let wm = Complex64::from_polar(1.0, -PI / m2 as f64);

            for k in (0..self.fft_size).step_by(m) {
                let mut w = Complex64::new(1.0, 0.0);
                for j in 0..m2 {
                    let t = w * buffer[k + j + m2];
                    let u = buffer[k + j];
                    buffer[k + j] = u + t;
                    buffer[k + j + m2] = u - t;
                    w *= wm;
                }
            }
        }

        Ok(())
    }

    /// Inverse transform in place
    pub fn inverse_transform_in_place(&self, buffer: &mut [Complex64]) -> Result<()> {
        self.check_len(buffer.len())?;

        for c in buffer.iter_mut() {
            *c = c.conj();
        }

        self.transform_in_place(buffer)?;

        let scale = 1.0 / self.fft_size as f64;
        for c in buffer.iter_mut() {
            *c = c.conj() * scale;
        }

        Ok(())
    }

    /// Compute FFT of a real frame and return the magnitude of every bin
    ///
    /// # Returns
    /// |X[k]| for k = 0..N (both halves; bins above N/2 mirror negative
    /// frequencies)
    pub fn compute_magnitude(&self, frame: &[f64]) -> Result<Vec<f64>> {
        self.check_len(frame.len())?;

        let mut buffer: Vec<Complex64> = frame.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        self.transform_in_place(&mut buffer)?;

        Ok(buffer.iter().map(|c| c.norm()).collect())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len == self.fft_size {
            Ok(())
        } else {
            Err(PurifirError::LengthMismatch {
                expected: self.fft_size,
                actual: len,
            })
        }
    }
}

/// Reverse the low `bits` bits of `index`
fn reverse_bits(index: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        index.reverse_bits() >> (usize::BITS - bits)
    }
}
