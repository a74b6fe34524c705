//! Destination for finished impulse responses

use crate::error::Result;

/// Receives the normalized IR once the pipeline has returned
///
/// File naming and encoding belong to implementors.
pub trait SaveSink {
    fn save(&mut self, channels: &[Vec<f64>], window_size: usize) -> Result<()>;
}

impl<F> SaveSink for F
where
    F: FnMut(&[Vec<f64>], usize) -> Result<()>,
{
    fn save(&mut self, channels: &[Vec<f64>], window_size: usize) -> Result<()> {
        self(channels, window_size)
    }
}
