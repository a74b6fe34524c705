//! Error types for the IR pipeline

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PurifirError {
    #[error("Window size must be a positive power of two (got {0})")]
    InvalidWindowSize(usize),

    #[error("Channel {channel} has {available} samples, at least {required} are needed")]
    InsufficientSamples {
        channel: usize,
        available: usize,
        required: usize,
    },

    #[error("Transform length mismatch: engine expects {expected} points, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Channels have unequal lengths")]
    RaggedChannels,

    #[error("Channel {channel} out of range ({channels} channels available)")]
    ChannelOutOfRange { channel: usize, channels: usize },

    #[error("Destination buffer is {channels}x{frames}, needs at least {expected_channels}x{expected_frames}")]
    DestinationMismatch {
        channels: usize,
        frames: usize,
        expected_channels: usize,
        expected_frames: usize,
    },

    #[error("Failed to save impulse response: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, PurifirError>;
