//! Sample buffer access
//!
//! The pipeline never owns host audio memory. It reads through an
//! [`AudioBufferPort`] once per channel and writes once per channel.

use crate::error::{PurifirError, Result};
use ndarray::{s, Array2, ArrayView1};

/// Channel-addressed access to a host sample buffer
pub trait AudioBufferPort {
    /// Number of channels
    fn channel_count(&self) -> usize;

    /// Number of sample frames per channel
    fn frame_count(&self) -> usize;

    /// Read up to `count` samples of `channel` starting at `offset`
    ///
    /// Fewer samples are returned when the range runs past the end.
    fn read(&self, channel: usize, offset: usize, count: usize) -> Result<Vec<f64>>;

    /// Overwrite samples of `channel` starting at `offset`
    fn write(&mut self, channel: usize, offset: usize, samples: &[f64]) -> Result<()>;
}

/// In-memory port backed by a (channels x frames) array
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelBuffer {
    samples: Array2<f64>,
}

impl ChannelBuffer {
    /// Silent buffer of the given shape
    pub fn new(channels: usize, frames: usize) -> Self {
        Self {
            samples: Array2::zeros((channels, frames)),
        }
    }

    /// Build from per-channel vectors of equal length
    pub fn from_channels(channels: &[Vec<f64>]) -> Result<Self> {
        let frames = channels.first().map_or(0, Vec::len);
        if channels.iter().any(|c| c.len() != frames) {
            return Err(PurifirError::RaggedChannels);
        }

        let flat: Vec<f64> = channels.iter().flatten().copied().collect();
        let samples = Array2::from_shape_vec((channels.len(), frames), flat)
            .map_err(|_| PurifirError::RaggedChannels)?;

        Ok(Self { samples })
    }

    /// Copy out as per-channel vectors
    pub fn to_channels(&self) -> Vec<Vec<f64>> {
        self.samples.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.samples
    }

    fn check_channel(&self, channel: usize) -> Result<()> {
        let channels = self.channel_count();
        if channel < channels {
            Ok(())
        } else {
            Err(PurifirError::ChannelOutOfRange { channel, channels })
        }
    }
}

impl From<Array2<f64>> for ChannelBuffer {
    fn from(samples: Array2<f64>) -> Self {
        Self { samples }
    }
}

impl AudioBufferPort for ChannelBuffer {
    fn channel_count(&self) -> usize {
        self.samples.nrows()
    }

    fn frame_count(&self) -> usize {
        self.samples.ncols()
    }

    fn read(&self, channel: usize, offset: usize, count: usize) -> Result<Vec<f64>> {
        self.check_channel(channel)?;

        let frames = self.frame_count();
        let start = offset.min(frames);
        let end = offset.saturating_add(count).min(frames);

        Ok(self.samples.slice(s![channel, start..end]).to_vec())
    }

    fn write(&mut self, channel: usize, offset: usize, samples: &[f64]) -> Result<()> {
        self.check_channel(channel)?;

        let end = match offset.checked_add(samples.len()) {
            Some(end) if end <= self.frame_count() => end,
            requested => {
                return Err(PurifirError::DestinationMismatch {
                    channels: self.channel_count(),
                    frames: self.frame_count(),
                    expected_channels: channel + 1,
                    expected_frames: requested.unwrap_or(usize::MAX),
                })
            }
        };

        self.samples
            .slice_mut(s![channel, offset..end])
            .assign(&ArrayView1::from(samples));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write() {
        let mut buffer = ChannelBuffer::new(2, 8);
        buffer.write(1, 2, &[1.0, 2.0, 3.0]).unwrap();

        assert_eq!(buffer.read(1, 0, 8).unwrap(), vec![0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
        assert_eq!(buffer.read(0, 0, 8).unwrap(), vec![0.0; 8]);
    }

    #[test]
    fn test_read_past_end_is_truncated() {
        let buffer = ChannelBuffer::from_channels(&[vec![1.0, 2.0, 3.0]]).unwrap();

        assert_eq!(buffer.read(0, 1, 10).unwrap(), vec![2.0, 3.0]);
        assert!(buffer.read(0, 5, 2).unwrap().is_empty());
    }

    #[test]
    fn test_channel_out_of_range() {
        let mut buffer = ChannelBuffer::new(1, 4);

        assert_eq!(
            buffer.read(3, 0, 4).unwrap_err(),
            PurifirError::ChannelOutOfRange { channel: 3, channels: 1 }
        );
        assert!(buffer.write(1, 0, &[1.0]).is_err());
    }

    #[test]
    fn test_write_past_end_fails() {
        let mut buffer = ChannelBuffer::new(1, 4);
        assert!(matches!(
            buffer.write(0, 2, &[1.0; 4]),
            Err(PurifirError::DestinationMismatch { expected_frames: 6, .. })
        ));
    }

    #[test]
    fn test_write_offset_overflow_fails() {
        let mut buffer = ChannelBuffer::new(1, 4);
        assert!(matches!(
            buffer.write(0, usize::MAX, &[1.0]),
            Err(PurifirError::DestinationMismatch { expected_frames: usize::MAX, .. })
        ));
        assert_eq!(buffer.read(0, 0, 4).unwrap(), vec![0.0; 4]);
    }

    #[test]
    fn test_channel_layout() {
        let channels = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let buffer = ChannelBuffer::from_channels(&channels).unwrap();

        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.frame_count(), 2);
        assert_eq!(buffer.as_array()[[1, 0]], 3.0);
        assert_eq!(buffer.to_channels(), channels);
    }

    #[test]
    fn test_ragged_channels_rejected() {
        let err = ChannelBuffer::from_channels(&[vec![1.0], vec![1.0, 2.0]]).unwrap_err();
        assert_eq!(err, PurifirError::RaggedChannels);
    }
}
