//! PuriFIR - Minimum-Phase Impulse Response Builder
//! 
//! Turns an arbitrary-length audio sample into a fixed-length, peak-normalized
//! minimum-phase FIR that keeps the sample's peak-hold magnitude spectrum.

pub mod audio;
pub mod config;
pub mod error;
pub mod filters;
pub mod pipeline;
pub mod spectrum;

pub use audio::{AudioBufferPort, ChannelBuffer, SaveSink};
pub use config::{PurifirConfig, WindowSize};
pub use error::{PurifirError, Result};
pub use filters::{MinimumPhaseReconstructor, WindowType};
pub use pipeline::{process, PurifirPipeline};
pub use spectrum::{EnvelopeExtractor, FftEngine};
