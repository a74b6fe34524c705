//! Spectral analysis with FFT

pub mod complex;
pub mod fft;
pub mod windowing;
pub mod envelope;

pub use fft::FftEngine;
pub use windowing::{apply_window, Window};
pub use envelope::{frame_offsets, EnvelopeExtractor};
