//! Sample-to-IR pipeline
//!
//! Per channel: peak-hold envelope, then minimum-phase reconstruction.
//! One normalization pass runs over the finished multi-channel result.

use crate::audio::{AudioBufferPort, SaveSink};
use crate::config::PurifirConfig;
use crate::error::{PurifirError, Result};
use crate::filters::minimum_phase::MinimumPhaseReconstructor;
use crate::filters::normalize::normalize;
use crate::spectrum::envelope::EnvelopeExtractor;

/// Converts sample buffers into normalized minimum-phase impulse responses
#[derive(Debug, Clone)]
pub struct PurifirPipeline {
    config: PurifirConfig,
    extractor: EnvelopeExtractor,
    reconstructor: MinimumPhaseReconstructor,
}

impl PurifirPipeline {
    /// Create a pipeline; window coefficients are computed here, once
    pub fn new(config: PurifirConfig) -> Self {
        Self {
            config,
            extractor: EnvelopeExtractor::new(config.window_size, config.window_type),
            reconstructor: MinimumPhaseReconstructor::new(config.window_size),
        }
    }

    /// Hann-windowed pipeline for a raw window size
    pub fn with_window_size(window_size: usize) -> Result<Self> {
        Ok(Self::new(PurifirConfig::with_window_size(window_size)?))
    }

    pub fn config(&self) -> &PurifirConfig {
        &self.config
    }

    pub fn window_size(&self) -> usize {
        self.config.window_size.get()
    }

    /// Build an IR of `window_size` samples per input channel
    ///
    /// Every channel is validated before any work starts. Channels are
    /// processed independently; the result is normalized to a peak of 1.0
    /// across all channels.
    pub fn process<C: AsRef<[f64]>>(&self, channels: &[C]) -> Result<Vec<Vec<f64>>> {
        let n = self.window_size();

        for (channel, samples) in channels.iter().enumerate() {
            let available = samples.as_ref().len();
            if available < n {
                return Err(PurifirError::InsufficientSamples {
                    channel,
                    available,
                    required: n,
                });
            }
        }

        tracing::info!(channels = channels.len(), window_size = n, "Building minimum-phase IR");

        let mut output = channels
            .iter()
            .enumerate()
            .map(|(channel, samples)| self.process_channel(channel, samples.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let peak = normalize(&mut output);
        if peak > 0.0 {
            tracing::debug!(peak, "Normalized IR");
        } else {
            tracing::warn!("Source is silent, IR left at zero");
        }

        Ok(output)
    }

    /// Un-normalized IR for a single channel
    pub fn process_channel(&self, channel: usize, samples: &[f64]) -> Result<Vec<f64>> {
        let envelope = self.extractor.extract_channel(channel, samples)?;
        self.reconstructor.reconstruct(&envelope)
    }

    /// Read every channel of `source` once
    pub fn read_channels<S: AudioBufferPort + ?Sized>(&self, source: &S) -> Result<Vec<Vec<f64>>> {
        let frames = source.frame_count();
        (0..source.channel_count())
            .map(|channel| source.read(channel, 0, frames))
            .collect()
    }

    /// Run the pipeline from one port into another
    ///
    /// `dest` must hold at least as many channels as `source` and at least
    /// `window_size` frames; it is checked before anything is written.
    pub fn process_port<S, D>(&self, source: &S, dest: &mut D) -> Result<()>
    where
        S: AudioBufferPort + ?Sized,
        D: AudioBufferPort + ?Sized,
    {
        let input = self.read_channels(source)?;
        let output = self.process(&input)?;

        let n = self.window_size();
        if dest.channel_count() < output.len() || dest.frame_count() < n {
            return Err(PurifirError::DestinationMismatch {
                channels: dest.channel_count(),
                frames: dest.frame_count(),
                expected_channels: output.len(),
                expected_frames: n,
            });
        }

        for (channel, samples) in output.iter().enumerate() {
            dest.write(channel, 0, samples)?;
        }

        Ok(())
    }

    /// Run the pipeline on `source` and hand the result to `sink`
    pub fn export<S, K>(&self, source: &S, sink: &mut K) -> Result<Vec<Vec<f64>>>
    where
        S: AudioBufferPort + ?Sized,
        K: SaveSink + ?Sized,
    {
        let output = self.process(&self.read_channels(source)?)?;
        sink.save(&output, self.window_size())?;
        Ok(output)
    }
}

/// One-shot IR build with a Hann window
pub fn process<C: AsRef<[f64]>>(channels: &[C], window_size: usize) -> Result<Vec<Vec<f64>>> {
    PurifirPipeline::with_window_size(window_size)?.process(channels)
}
