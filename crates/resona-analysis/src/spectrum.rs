//! Magnitude spectrum computation.

use crate::fft::Fft;
use resona_core::{AudioBuffer, BandSelector, Error, Result, bandpass_zero_phase, nearest};

/// A magnitude spectrum over the non-negative frequency half.
///
/// `frequencies` and `magnitudes` are index-aligned and `floor(N/2)`
/// entries long for an N-sample input. Derived data: recomputed on
/// demand, never cached across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Bin center frequencies in Hz, `freq[k] = k * rate / N`.
    pub frequencies: Vec<f32>,
    /// Unnormalized DFT magnitudes, one per bin.
    pub magnitudes: Vec<f32>,
}

impl Spectrum {
    /// Number of bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when the spectrum holds no bins.
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// The (frequency, magnitude) pair of the strongest bin.
    pub fn peak(&self) -> Option<(f32, f32)> {
        resona_core::argmax(&self.magnitudes).map(|i| (self.frequencies[i], self.magnitudes[i]))
    }

    /// Bin index whose frequency is closest to `target_hz`.
    ///
    /// Stable argmin; ties resolve to the lower bin.
    pub fn nearest_bin(&self, target_hz: f32) -> Option<(usize, f32)> {
        nearest(&self.frequencies, target_hz)
    }
}

/// Compute the magnitude spectrum of a sample sequence.
///
/// Transforms at exactly the signal length (no windowing, no
/// normalization) and keeps only the non-negative frequency half.
///
/// # Errors
///
/// [`Error::EmptySignal`] for empty input.
pub fn analyze(samples: &[f32], sample_rate: u32) -> Result<Spectrum> {
    if samples.is_empty() {
        return Err(Error::EmptySignal);
    }

    let n = samples.len();
    let fft = Fft::new(n);
    let full = fft.forward(samples);

    let half = n / 2;
    let bin_width = sample_rate as f32 / n as f32;

    let frequencies = (0..half).map(|k| k as f32 * bin_width).collect();
    let magnitudes = full.iter().take(half).map(|c| c.norm()).collect();

    Ok(Spectrum {
        frequencies,
        magnitudes,
    })
}

/// Compute the spectrum of a named band of the buffer.
///
/// Filtering always happens in the time domain first; the spectrum is
/// then taken of the filtered samples. `Combined` skips the filter and
/// analyzes the buffer as-is.
pub fn analyze_band(buffer: &AudioBuffer, selector: BandSelector, order: usize) -> Result<Spectrum> {
    match selector.band() {
        None => analyze(buffer.samples(), buffer.sample_rate()),
        Some(band) => {
            let filtered = bandpass_zero_phase(buffer, band, order)?;
            analyze(&filtered, buffer.sample_rate())
        }
    }
}
