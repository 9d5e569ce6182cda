//! Mono audio buffers and channel downmixing.

use crate::error::{Error, Result};

/// An immutable mono PCM buffer plus its sample rate.
///
/// This is the unit of exchange for every analysis routine. How the
/// samples were obtained (WAV decode, synthesis, ...) is the caller's
/// concern; the core only requires mono samples and a positive rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Wrap already-mono samples.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::ZeroSampleRate);
        }
        Ok(Self {
            sample_rate,
            samples,
        })
    }

    /// Build a mono buffer from raw per-channel sample data.
    ///
    /// A single channel passes through unchanged; two channels are mixed
    /// down by sample-wise arithmetic mean. Any other channel count is
    /// rejected rather than guessed at.
    pub fn from_channels(channels: &[Vec<f32>], sample_rate: u32) -> Result<Self> {
        let samples = match channels {
            [mono] => mono.clone(),
            [left, right] => {
                if left.len() != right.len() {
                    return Err(Error::MismatchedChannels {
                        left: left.len(),
                        right: right.len(),
                    });
                }
                left.iter()
                    .zip(right.iter())
                    .map(|(l, r)| (l + r) / 2.0)
                    .collect()
            }
            other => {
                return Err(Error::UnsupportedChannelLayout {
                    channels: other.len(),
                });
            }
        };
        Self::new(samples, sample_rate)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Nyquist frequency in Hz.
    pub fn nyquist_hz(&self) -> f32 {
        self.sample_rate as f32 / 2.0
    }

    /// The mono sample data.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Time axis aligned with the samples: `t[i] = i / sample_rate`.
    ///
    /// Half-open by construction, so the final endpoint `duration_secs`
    /// is never included. FFT bin alignment assumes this convention.
    pub fn time_axis(&self) -> Vec<f32> {
        let rate = self.sample_rate as f32;
        (0..self.samples.len()).map(|i| i as f32 / rate).collect()
    }
}
