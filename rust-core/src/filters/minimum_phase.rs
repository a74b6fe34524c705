//! Minimum-phase reconstruction from a magnitude envelope
//!
//! Real-cepstrum method: the log-magnitude is transformed into the
//! cepstral domain, folded onto its causal half, and transformed back.
//! The imaginary part of the result is the minimum-phase angle implied
//! by the magnitude. The magnitude itself is carried through unchanged.
//!
//! # Algorithm
//! 1. logMag[i] = ln(envelope[i] + ε)
//! 2. cepstrum = FFT(logMag)
//! 3. Fold with H: H[0] = H[N/2] = 1, H[1..N/2] = 2, zero above N/2
//! 4. analytic = IFFT(cepstrum · H)
//! 5. phase[i] = -Im(analytic[i])
//! 6. spectrum[i] = envelope[i]·e^(j·phase[i])
//! 7. impulse = Re(IFFT(spectrum))

use crate::config::WindowSize;
use crate::error::{PurifirError, Result};
use crate::spectrum::complex::{ln_floored, promote, real_parts, rect};
use crate::spectrum::fft::FftEngine;

/// Causal cepstral fold for an N-point cepstrum
///
/// Bins above N/2 stay zero, discarding the anti-causal half.
pub fn hilbert_mask(n: usize) -> Vec<f64> {
    let mut mask = vec![0.0; n];
    if n == 0 {
        return mask;
    }

    mask[0] = 1.0;
    for h in mask.iter_mut().take(n / 2).skip(1) {
        *h = 2.0;
    }
    mask[n / 2] = 1.0;

    mask
}

/// Turns magnitude envelopes into minimum-phase impulse responses
#[derive(Debug, Clone)]
pub struct MinimumPhaseReconstructor {
    fft: FftEngine,
    mask: Vec<f64>,
}

impl MinimumPhaseReconstructor {
    pub fn new(window_size: WindowSize) -> Self {
        Self {
            fft: FftEngine::with_size(window_size),
            mask: hilbert_mask(window_size.get()),
        }
    }

    /// Minimum phase implied by `envelope`, one angle per bin
    ///
    /// Angles follow the forward transform's `e^(-jωn)` kernel: bin k of the
    /// returned IR's spectrum has argument `phase[k]`. Under an `e^(+jωn)`
    /// forward kernel the same filter would report `-phase[k]`.
    pub fn minimum_phase(&self, envelope: &[f64]) -> Result<Vec<f64>> {
        let n = self.fft.fft_size();
        if envelope.len() != n {
            return Err(PurifirError::LengthMismatch {
                expected: n,
                actual: envelope.len(),
            });
        }

        let log_magnitude: Vec<f64> = envelope.iter().map(|&m| ln_floored(m)).collect();

        let mut cepstrum = promote(&log_magnitude);
        self.fft.transform_in_place(&mut cepstrum)?;

        for (c, &h) in cepstrum.iter_mut().zip(&self.mask) {
            *c *= h;
        }

        self.fft.inverse_transform_in_place(&mut cepstrum)?;

        Ok(cepstrum.iter().map(|analytic| -analytic.im).collect())
    }

    /// Causal minimum-phase impulse with the magnitude spectrum `envelope`
    pub fn reconstruct(&self, envelope: &[f64]) -> Result<Vec<f64>> {
        let phase = self.minimum_phase(envelope)?;

        let mut spectrum: Vec<_> = envelope
            .iter()
            .zip(&phase)
            .map(|(&magnitude, &angle)| rect(magnitude, angle))
            .collect();

        self.fft.inverse_transform_in_place(&mut spectrum)?;

        // Imaginary residue is rounding noise
        Ok(real_parts(&spectrum))
    }
}
