//! Zero-phase Butterworth band-pass filtering.
//!
//! The band-pass is realized as cascaded high-pass and low-pass biquad
//! sections with Butterworth pole Qs (order/2 second-order sections per
//! leg). Zero phase comes from running the cascade forward over the
//! signal and then backward over the result, which cancels the phase
//! response and leaves features like peaks time-aligned with the input.

use crate::bands::FrequencyBand;
use crate::biquad::{Biquad, highpass_coefficients, lowpass_coefficients};
use crate::buffer::AudioBuffer;
use crate::error::{Error, Result};

/// Default filter order used throughout the analyzer.
pub const DEFAULT_ORDER: usize = 4;

/// Q values of the second-order sections of an order-n Butterworth.
///
/// `order` must be even and at least 2. For order 4 this yields the
/// familiar pair 0.5412 / 1.3066.
fn butterworth_qs(order: usize) -> Vec<f32> {
    let n = order as f32;
    (0..order / 2)
        .map(|k| {
            let theta = std::f32::consts::PI * (2 * k + 1) as f32 / (2.0 * n);
            1.0 / (2.0 * theta.cos())
        })
        .collect()
}

/// A single-direction Butterworth band-pass cascade.
#[derive(Debug, Clone)]
struct BandpassCascade {
    highpass: Vec<Biquad>,
    lowpass: Vec<Biquad>,
}

impl BandpassCascade {
    fn new(sample_rate: f32, band: FrequencyBand, order: usize) -> Result<Self> {
        if order < 2 || order % 2 != 0 {
            return Err(Error::InvalidOrder { order });
        }
        let nyquist_hz = sample_rate / 2.0;
        if !band.is_valid_for(nyquist_hz) {
            return Err(Error::InvalidBand {
                low_hz: band.low_hz,
                high_hz: band.high_hz,
                nyquist_hz,
            });
        }

        let mut highpass = Vec::with_capacity(order / 2);
        let mut lowpass = Vec::with_capacity(order / 2);
        for q in butterworth_qs(order) {
            let mut hp = Biquad::new();
            let (b0, b1, b2, a0, a1, a2) = highpass_coefficients(band.low_hz, q, sample_rate);
            hp.set_coefficients(b0, b1, b2, a0, a1, a2);
            highpass.push(hp);

            let mut lp = Biquad::new();
            let (b0, b1, b2, a0, a1, a2) = lowpass_coefficients(band.high_hz, q, sample_rate);
            lp.set_coefficients(b0, b1, b2, a0, a1, a2);
            lowpass.push(lp);
        }

        Ok(Self { highpass, lowpass })
    }

    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let mut sample = input;
        for hp in &mut self.highpass {
            sample = hp.process(sample);
        }
        for lp in &mut self.lowpass {
            sample = lp.process(sample);
        }
        sample
    }

    fn reset(&mut self) {
        for hp in &mut self.highpass {
            hp.clear();
        }
        for lp in &mut self.lowpass {
            lp.clear();
        }
    }
}

/// Minimum sample count the signal must exceed for a given order.
///
/// Mirrors the padding rule of forward-backward filtering: three times
/// the transfer-function length of an order-n band-pass.
pub fn min_samples(order: usize) -> usize {
    3 * (2 * order + 1)
}

/// Apply a zero-phase Butterworth band-pass to a buffer.
///
/// Filters forward, reverses, filters again, and reverses back, so the
/// output is time-aligned with the input with no group delay.
///
/// # Errors
///
/// [`Error::InvalidBand`] unless `0 < low < high < Nyquist`;
/// [`Error::InvalidOrder`] for odd or sub-2 orders;
/// [`Error::InsufficientSamples`] when the buffer is too short for the
/// requested order.
pub fn bandpass_zero_phase(
    buffer: &AudioBuffer,
    band: FrequencyBand,
    order: usize,
) -> Result<Vec<f32>> {
    let mut cascade = BandpassCascade::new(buffer.sample_rate() as f32, band, order)?;

    let required = min_samples(order);
    if buffer.len() <= required {
        return Err(Error::InsufficientSamples {
            len: buffer.len(),
            required,
        });
    }

    // Forward pass.
    let mut out: Vec<f32> = buffer.samples().iter().map(|&x| cascade.process(x)).collect();

    // Backward pass over the reversed forward output.
    out.reverse();
    cascade.reset();
    for sample in &mut out {
        *sample = cascade.process(*sample);
    }
    out.reverse();

    Ok(out)
}
