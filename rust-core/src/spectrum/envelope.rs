//! Peak-hold spectral envelope
//!
//! Slides half-overlapping windowed frames across a channel and keeps the
//! largest magnitude seen in every bin. The envelope never drops content
//! that appears anywhere in the source.

use super::fft::FftEngine;
use super::windowing::Window;
use crate::config::WindowSize;
use crate::error::{PurifirError, Result};
use crate::filters::windows::WindowType;

/// Offsets of the analysis frames for a channel of `len` samples
///
/// The frame at offset 0 is always analysed when `len >= N`. Later frames
/// start at multiples of N/2 and are analysed while `offset + N < len`.
pub fn frame_offsets(len: usize, window_size: WindowSize) -> impl Iterator<Item = usize> {
    let n = window_size.get();
    let hop = window_size.hop();

    (len >= n)
        .then_some(0)
        .into_iter()
        .chain((1..).map(move |i| i * hop).take_while(move |&offset| offset + n < len))
}

/// Spectral envelope extractor
#[derive(Debug, Clone)]
pub struct EnvelopeExtractor {
    window_size: WindowSize,
    fft: FftEngine,
    window: Window,
}

impl EnvelopeExtractor {
    /// Create an extractor, computing the window coefficients once
    pub fn new(window_size: WindowSize, window_type: WindowType) -> Self {
        Self {
            window_size,
            fft: FftEngine::with_size(window_size),
            window: Window::new(window_type, window_size.get()),
        }
    }

    pub fn window_size(&self) -> WindowSize {
        self.window_size
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Peak-hold magnitude envelope of a single channel
    ///
    /// # Returns
    /// N magnitudes indexed by FFT bin
    pub fn extract(&self, samples: &[f64]) -> Result<Vec<f64>> {
        self.extract_channel(0, samples)
    }

    /// Same as [`extract`](Self::extract), reporting `channel` on failure
    pub fn extract_channel(&self, channel: usize, samples: &[f64]) -> Result<Vec<f64>> {
        let n = self.window_size.get();
        if samples.len() < n {
            return Err(PurifirError::InsufficientSamples {
                channel,
                available: samples.len(),
                required: n,
            });
        }

        let mut envelope = vec![0.0; n];
        let mut frame = vec![0.0; n];
        let mut frames = 0usize;

        for offset in frame_offsets(samples.len(), self.window_size) {
            self.window.apply_into(&samples[offset..offset + n], &mut frame);
            let magnitude = self.fft.compute_magnitude(&frame)?;

            for (peak, m) in envelope.iter_mut().zip(magnitude) {
                if m > *peak {
                    *peak = m;
                }
            }
            frames += 1;
        }

        tracing::debug!(channel, frames, window_size = n, "Extracted spectral envelope");

        Ok(envelope)
    }
}
