//! Amplitude envelope extraction via the analytic signal.
//!
//! The envelope of an oscillating signal is the magnitude of its
//! analytic signal, computed with the FFT Hilbert-transform method:
//! transform, zero the negative-frequency bins, double the positive
//! ones, and transform back. Unlike per-sample rectification this gives
//! a smooth envelope that tracks the carrier's amplitude rather than
//! its instantaneous value, which the decay search depends on.

use crate::fft::Fft;
use rustfft::num_complex::Complex;

/// Instantaneous amplitude (envelope) of a real signal.
///
/// Output is index-aligned with the input. Empty input yields an empty
/// envelope. The transform runs at the next power of two above the
/// signal length and is truncated back afterwards.
pub fn analytic_amplitude(signal: &[f32]) -> Vec<f32> {
    if signal.is_empty() {
        return Vec::new();
    }

    let fft_size = signal.len().next_power_of_two();
    let fft = Fft::new(fft_size);

    let mut buffer: Vec<Complex<f32>> =
        signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    fft.forward_complex(&mut buffer);

    // DC and Nyquist stay; positive frequencies double; negative go to zero.
    let half = fft_size / 2;
    for sample in buffer.iter_mut().take(half).skip(1) {
        *sample *= 2.0;
    }
    for sample in buffer.iter_mut().skip(half + 1) {
        *sample = Complex::new(0.0, 0.0);
    }

    fft.inverse_complex(&mut buffer);

    buffer.iter().take(signal.len()).map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_envelope_of_pure_sine_is_flat() {
        let sample_rate = 1000.0;
        let num_samples = 512;
        let signal: Vec<f32> = (0..num_samples)
            .map(|i| (2.0 * PI * 50.0 * i as f32 / sample_rate).sin())
            .collect();

        let envelope = analytic_amplitude(&signal);
        assert_eq!(envelope.len(), num_samples);

        // Middle portion avoids edge effects of the circular transform.
        for &amp in &envelope[num_samples / 4..3 * num_samples / 4] {
            assert!((amp - 1.0).abs() < 0.1, "envelope should be ~1.0, got {amp}");
        }
    }

    #[test]
    fn test_envelope_tracks_modulation() {
        let sample_rate = 1000.0;
        let num_samples = 1024;
        let signal: Vec<f32> = (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate;
                let modulator = 0.5 + 0.5 * (2.0 * PI * 5.0 * t).cos();
                modulator * (2.0 * PI * 50.0 * t).sin()
            })
            .collect();

        let envelope = analytic_amplitude(&signal);
        let mid = &envelope[num_samples / 4..3 * num_samples / 4];

        let min = mid.iter().copied().fold(f32::INFINITY, f32::min);
        let max = mid.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(min < 0.3, "envelope trough should approach 0, got {min}");
        assert!(max > 0.8, "envelope crest should approach 1, got {max}");
    }

    #[test]
    fn test_envelope_of_decaying_sine_decays() {
        let sample_rate = 8000.0;
        let num_samples = 4096;
        let tau = 0.1;
        let signal: Vec<f32> = (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate;
                (-t / tau).exp() * (2.0 * PI * 500.0 * t).sin()
            })
            .collect();

        let envelope = analytic_amplitude(&signal);
        let early = envelope[256];
        let late = envelope[2048];
        let expected_ratio = (-(2048.0 - 256.0) / sample_rate / tau).exp();
        let ratio = late / early;
        assert!(
            (ratio / expected_ratio - 1.0).abs() < 0.2,
            "decay ratio {ratio} vs expected {expected_ratio}"
        );
    }

    #[test]
    fn test_empty_signal() {
        assert!(analytic_amplitude(&[]).is_empty());
    }

    #[test]
    fn test_non_power_of_two_length() {
        let signal = vec![1.0; 300];
        let envelope = analytic_amplitude(&signal);
        assert_eq!(envelope.len(), 300);
        assert!(envelope.iter().all(|x| x.is_finite()));
    }
}
