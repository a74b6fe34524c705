//! Pipeline configuration

use crate::error::{PurifirError, Result};
use crate::filters::windows::WindowType;

/// Validated IR length: a positive power of two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowSize(usize);

impl WindowSize {
    pub const SIZE_2048: WindowSize = WindowSize(2048);
    pub const SIZE_4096: WindowSize = WindowSize(4096);
    pub const SIZE_8192: WindowSize = WindowSize(8192);
    pub const SIZE_16384: WindowSize = WindowSize(16384);

    /// Validate a window size
    ///
    /// Fails with `InvalidWindowSize` for zero or any value that is not a
    /// power of two.
    pub fn new(size: usize) -> Result<Self> {
        if size.is_power_of_two() {
            Ok(Self(size))
        } else {
            Err(PurifirError::InvalidWindowSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Hop between successive analysis frames (50% overlap)
    pub fn hop(self) -> usize {
        (self.0 / 2).max(1)
    }

    /// Number of radix-2 stages
    pub fn log2(self) -> u32 {
        self.0.trailing_zeros()
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::SIZE_4096
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = PurifirError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<WindowSize> for usize {
    fn from(size: WindowSize) -> usize {
        size.0
    }
}

/// IR pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurifirConfig {
    /// IR length, also the analysis frame length
    pub window_size: WindowSize,

    /// Analysis window applied to every frame
    pub window_type: WindowType,
}

impl PurifirConfig {
    /// Hann-windowed configuration for a raw window size
    pub fn with_window_size(size: usize) -> Result<Self> {
        Ok(Self {
            window_size: WindowSize::new(size)?,
            window_type: WindowType::Hann,
        })
    }
}
