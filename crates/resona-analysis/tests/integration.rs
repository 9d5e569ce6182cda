//! Integration tests for the analysis pipeline.
//!
//! Exercises the public API end to end on synthetic signals with known
//! properties: pure tones for the spectrum path and exponentially
//! decaying sinusoids with a known time constant for RT60.

use std::f32::consts::PI;

use resona_analysis::{reverb, spectrum};
use resona_core::{AudioBuffer, BandSelector, Error};

const SAMPLE_RATE: u32 = 48000;

/// Sine with an exponential amplitude envelope `exp(-t/tau)`.
fn decaying_sine(freq_hz: f32, tau_secs: f32, num_samples: usize) -> AudioBuffer {
    let rate = SAMPLE_RATE as f32;
    let samples = (0..num_samples)
        .map(|i| {
            let t = i as f32 / rate;
            (-t / tau_secs).exp() * (2.0 * PI * freq_hz * t).sin()
        })
        .collect();
    AudioBuffer::new(samples, SAMPLE_RATE).unwrap()
}

fn sine(freq_hz: f32, num_samples: usize) -> AudioBuffer {
    let rate = SAMPLE_RATE as f32;
    let samples = (0..num_samples)
        .map(|i| (2.0 * PI * freq_hz * i as f32 / rate).sin())
        .collect();
    AudioBuffer::new(samples, SAMPLE_RATE).unwrap()
}

// ---------------------------------------------------------------------------
// Spectrum pipeline
// ---------------------------------------------------------------------------

#[test]
fn spectrum_of_mixture_resolves_band_content() {
    // 100 Hz + 5 kHz mixture: each named band sees only its own tone.
    let rate = SAMPLE_RATE as f32;
    let samples: Vec<f32> = (0..SAMPLE_RATE as usize)
        .map(|i| {
            let t = i as f32 / rate;
            (2.0 * PI * 100.0 * t).sin() + (2.0 * PI * 5000.0 * t).sin()
        })
        .collect();
    let buffer = AudioBuffer::new(samples, SAMPLE_RATE).unwrap();

    let low = spectrum::analyze_band(&buffer, BandSelector::Low, 4).unwrap();
    let (low_freq, _) = low.peak().unwrap();
    assert!((low_freq - 100.0).abs() < 5.0, "low-band peak at {low_freq}");

    let high = spectrum::analyze_band(&buffer, BandSelector::High, 4).unwrap();
    let (high_freq, _) = high.peak().unwrap();
    assert!(
        (high_freq - 5000.0).abs() < 5.0,
        "high-band peak at {high_freq}"
    );

    let combined = spectrum::analyze_band(&buffer, BandSelector::Combined, 4).unwrap();
    assert_eq!(combined.len(), buffer.len() / 2);
}

// ---------------------------------------------------------------------------
// RT60 pipeline
// ---------------------------------------------------------------------------

#[test]
fn rt60_of_synthetic_decay_matches_analytic_value() {
    // For an exp(-t/tau) amplitude envelope the 60 dB decay time is
    // 60 / (20 * log10(e)) * tau = 6.91 * tau.
    let tau = 0.1;
    let buffer = decaying_sine(1000.0, tau, SAMPLE_RATE as usize);

    let analysis = reverb::estimate_rt60(&buffer, &reverb::Rt60Config::default()).unwrap();
    let result = analysis.result;

    let expected = 6.91 * tau;
    let relative_error = (result.rt60_seconds - expected).abs() / expected;
    assert!(
        relative_error < 0.15,
        "RT60 {} s should be within 15% of {} s",
        result.rt60_seconds,
        expected
    );

    assert!((result.target_frequency_hz - 1000.0).abs() < 1.0);
    assert!(result.peak_index < result.drop_start_index);
    assert!(result.drop_start_index < result.drop_end_index);
}

#[test]
fn rt60_scales_with_the_time_constant() {
    let short = decaying_sine(1000.0, 0.05, SAMPLE_RATE as usize);
    let long = decaying_sine(1000.0, 0.15, 2 * SAMPLE_RATE as usize);

    let config = reverb::Rt60Config::default();
    let short_rt = reverb::estimate_rt60(&short, &config).unwrap().result.rt60_seconds;
    let long_rt = reverb::estimate_rt60(&long, &config).unwrap().result.rt60_seconds;

    let ratio = long_rt / short_rt;
    assert!(
        (ratio - 3.0).abs() < 0.5,
        "tripled tau should roughly triple RT60, got ratio {ratio}"
    );
}

#[test]
fn rt60_with_custom_span_agrees_with_default() {
    // A clean exponential decay measures the same RT60 regardless of
    // which portion of the slope is timed.
    let buffer = decaying_sine(1000.0, 0.1, SAMPLE_RATE as usize);

    let default = reverb::estimate_rt60(&buffer, &reverb::Rt60Config::default())
        .unwrap()
        .result
        .rt60_seconds;

    let wide = reverb::Rt60Config {
        drop_start_db: 5.0,
        drop_end_db: 35.0,
        ..reverb::Rt60Config::default()
    };
    let wide_rt = reverb::estimate_rt60(&buffer, &wide).unwrap().result.rt60_seconds;

    let relative = (wide_rt - default).abs() / default;
    assert!(
        relative < 0.1,
        "span choice changed RT60 too much: {default} vs {wide_rt}"
    );
}

#[test]
fn rt60_envelope_is_aligned_with_buffer() {
    let buffer = decaying_sine(1000.0, 0.1, 24000);
    let analysis = reverb::estimate_rt60(&buffer, &reverb::Rt60Config::default()).unwrap();

    assert_eq!(analysis.envelope.time.len(), buffer.len());
    assert_eq!(analysis.envelope.level_db.len(), buffer.len());
    assert_eq!(analysis.envelope.time[0], 0.0);
}

#[test]
fn rt60_of_single_sample_fails_with_no_decay() {
    let buffer = AudioBuffer::new(vec![0.7], SAMPLE_RATE).unwrap();
    let err = reverb::estimate_rt60(&buffer, &reverb::Rt60Config::default()).unwrap_err();
    assert_eq!(err, Error::NoDecayFound);
}

#[test]
fn rt60_near_dc_target_fails_with_invalid_band() {
    let buffer = sine(40.0, 9600);
    let config = reverb::Rt60Config {
        target_hz: 40.0,
        ..reverb::Rt60Config::default()
    };
    let err = reverb::estimate_rt60(&buffer, &config).unwrap_err();
    assert!(matches!(err, Error::InvalidBand { .. }));
}

#[test]
fn rt60_of_empty_buffer_fails() {
    let buffer = AudioBuffer::new(Vec::new(), SAMPLE_RATE).unwrap();
    let err = reverb::estimate_rt60(&buffer, &reverb::Rt60Config::default()).unwrap_err();
    assert_eq!(err, Error::NoDecayFound);
}
