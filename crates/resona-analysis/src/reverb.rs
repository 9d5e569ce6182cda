//! RT60 reverberation-time estimation.
//!
//! The estimator is a linear pipeline over one buffer: locate the
//! dominant bin near a nominal target frequency, band-pass the signal
//! around it, convert the filtered envelope to decibels, and time the
//! decay from the envelope peak through two threshold crossings. The
//! default 5 dB / 25 dB span is the standard RT20 measurement,
//! extrapolated to the 60 dB reverberation time.

use crate::envelope::analytic_amplitude;
use crate::spectrum;
use resona_core::{
    AudioBuffer, Error, FrequencyBand, Result, argmax, bandpass_zero_phase,
    filter::DEFAULT_ORDER, nearest,
};

/// Floor added before taking logs so silence maps to a finite level.
const DB_EPSILON: f32 = 1e-10;

/// Tunable parameters of the RT60 estimation pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rt60Config {
    /// Nominal target frequency in Hz; the nearest spectrum bin is used.
    pub target_hz: f32,
    /// Half-width of the analysis band around the target, in Hz.
    pub half_band_hz: f32,
    /// Drop below the peak where decay timing starts, in dB.
    pub drop_start_db: f32,
    /// Drop below the peak where decay timing ends, in dB.
    pub drop_end_db: f32,
    /// Band-pass filter order.
    pub filter_order: usize,
}

impl Default for Rt60Config {
    fn default() -> Self {
        Self {
            target_hz: 1000.0,
            half_band_hz: 50.0,
            drop_start_db: 5.0,
            drop_end_db: 25.0,
            filter_order: DEFAULT_ORDER,
        }
    }
}

/// Decibel decay envelope of the band-filtered signal.
///
/// Index-aligned with the filtered buffer's time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayEnvelope {
    /// Time axis in seconds, `t[i] = i / rate`.
    pub time: Vec<f32>,
    /// Envelope level in dB.
    pub level_db: Vec<f32>,
}

/// Outcome of a successful RT60 estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rt60Result {
    /// The spectrum bin frequency actually analyzed, in Hz.
    pub target_frequency_hz: f32,
    /// Estimated reverberation time in seconds.
    pub rt60_seconds: f32,
    /// Envelope peak position.
    pub peak_index: usize,
    /// Sample nearest to `peak - drop_start_db` (default: -5 dB).
    pub drop_start_index: usize,
    /// Sample nearest to `peak - drop_end_db` (default: -25 dB).
    pub drop_end_index: usize,
}

/// RT60 estimate together with the envelope it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Rt60Analysis {
    /// The estimate.
    pub result: Rt60Result,
    /// Decay envelope for plotting.
    pub envelope: DecayEnvelope,
}

/// Decibel decay envelope of a filtered sample sequence.
///
/// The envelope is the analytic-signal amplitude converted to dB:
/// `level_db[i] = 20 * log10(env[i] + 1e-10)`.
pub fn decay_envelope(filtered: &[f32], sample_rate: u32) -> DecayEnvelope {
    let rate = sample_rate as f32;
    let level_db = analytic_amplitude(filtered)
        .iter()
        .map(|&e| 20.0 * (e + DB_EPSILON).log10())
        .collect();
    let time = (0..filtered.len()).map(|i| i as f32 / rate).collect();
    DecayEnvelope { time, level_db }
}

/// Locate the peak and the two decay crossings in a dB envelope.
///
/// The search for both crossings runs over the full post-peak suffix;
/// an earlier-index match can never be returned because decay happens
/// after the peak. Returns `(peak, drop_start, drop_end)` as absolute
/// indices into `level_db`.
fn decay_indices(
    level_db: &[f32],
    drop_start_db: f32,
    drop_end_db: f32,
) -> Result<(usize, usize, usize)> {
    let peak = argmax(level_db).ok_or(Error::NoDecayFound)?;
    let suffix = &level_db[peak..];
    if suffix.len() < 2 {
        return Err(Error::NoDecayFound);
    }

    let peak_value = level_db[peak];
    let (start, _) = nearest(suffix, peak_value - drop_start_db).ok_or(Error::NoDecayFound)?;
    let (end, _) = nearest(suffix, peak_value - drop_end_db).ok_or(Error::NoDecayFound)?;

    Ok((peak, peak + start, peak + end))
}

/// Estimate RT60 from a mono buffer.
///
/// See the module docs for the pipeline. Degenerate inputs fail loudly:
/// a buffer too short to decay yields [`Error::NoDecayFound`], a target
/// too close to DC yields [`Error::InvalidBand`], and the band and
/// length checks of the filter apply unchanged.
pub fn estimate_rt60(buffer: &AudioBuffer, config: &Rt60Config) -> Result<Rt60Analysis> {
    if config.drop_end_db <= config.drop_start_db {
        return Err(Error::InvalidDecaySpan {
            start_db: config.drop_start_db,
            end_db: config.drop_end_db,
        });
    }
    if buffer.len() < 2 {
        return Err(Error::NoDecayFound);
    }

    // Target selection over the full-buffer spectrum.
    let full = spectrum::analyze(buffer.samples(), buffer.sample_rate())?;
    let (_, target_hz) = full.nearest_bin(config.target_hz).ok_or(Error::EmptySignal)?;

    let band = FrequencyBand::new(
        target_hz - config.half_band_hz,
        target_hz + config.half_band_hz,
    );
    if band.low_hz <= 0.0 {
        return Err(Error::InvalidBand {
            low_hz: band.low_hz,
            high_hz: band.high_hz,
            nyquist_hz: buffer.nyquist_hz(),
        });
    }

    let filtered = bandpass_zero_phase(buffer, band, config.filter_order)?;
    let envelope = decay_envelope(&filtered, buffer.sample_rate());

    let (peak_index, drop_start_index, drop_end_index) =
        decay_indices(&envelope.level_db, config.drop_start_db, config.drop_end_db)?;

    // RT20-style extrapolation: scale the measured span up to 60 dB. The
    // absolute value guards against the crossings landing out of order on
    // a noisy, non-monotonic envelope.
    let span_db = config.drop_end_db - config.drop_start_db;
    let span_secs = (envelope.time[drop_end_index] - envelope.time[drop_start_index]).abs();
    let rt60_seconds = span_secs * 60.0 / span_db;

    Ok(Rt60Analysis {
        result: Rt60Result {
            target_frequency_hz: target_hz,
            rt60_seconds,
            peak_index,
            drop_start_index,
            drop_end_index,
        },
        envelope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_indices_linear_ramp() {
        // 0, -1, -2, ... -30 dB: crossings land exactly on -5 and -25.
        let level_db: Vec<f32> = (0..=30).map(|i| -(i as f32)).collect();
        let (peak, start, end) = decay_indices(&level_db, 5.0, 25.0).unwrap();
        assert_eq!(peak, 0);
        assert_eq!(start, 5);
        assert_eq!(end, 25);
    }

    #[test]
    fn test_decay_indices_peak_in_middle() {
        let mut level_db: Vec<f32> = (0..10).map(|i| i as f32).collect();
        level_db.extend((0..=30).map(|i| 9.0 - i as f32));
        let (peak, start, end) = decay_indices(&level_db, 5.0, 25.0).unwrap();
        assert_eq!(peak, 9);
        assert!(start > peak && end > start);
    }

    #[test]
    fn test_decay_indices_peak_at_last_sample() {
        let level_db = [-3.0, -2.0, -1.0, 0.0];
        let err = decay_indices(&level_db, 5.0, 25.0).unwrap_err();
        assert_eq!(err, Error::NoDecayFound);
    }

    #[test]
    fn test_decay_indices_empty() {
        assert_eq!(decay_indices(&[], 5.0, 25.0).unwrap_err(), Error::NoDecayFound);
    }

    #[test]
    fn test_invalid_span_rejected() {
        let buffer = AudioBuffer::new(vec![0.0; 1024], 48000).unwrap();
        let config = Rt60Config {
            drop_start_db: 25.0,
            drop_end_db: 5.0,
            ..Rt60Config::default()
        };
        let err = estimate_rt60(&buffer, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidDecaySpan { .. }));
    }

    #[test]
    fn test_single_sample_buffer_is_no_decay() {
        let buffer = AudioBuffer::new(vec![0.5], 48000).unwrap();
        let err = estimate_rt60(&buffer, &Rt60Config::default()).unwrap_err();
        assert_eq!(err, Error::NoDecayFound);
    }

    #[test]
    fn test_low_target_yields_invalid_band() {
        let buffer = AudioBuffer::new(vec![0.1; 4800], 48000).unwrap();
        let config = Rt60Config {
            target_hz: 30.0,
            ..Rt60Config::default()
        };
        // Nearest bin is ~30 Hz; 30 - 50 <= 0.
        let err = estimate_rt60(&buffer, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidBand { .. }));
    }

    #[test]
    fn test_envelope_time_axis_alignment() {
        let filtered = vec![0.0; 100];
        let envelope = decay_envelope(&filtered, 1000);
        assert_eq!(envelope.time.len(), envelope.level_db.len());
        assert_eq!(envelope.time[0], 0.0);
        assert!((envelope.time[99] - 0.099).abs() < 1e-6);
        // Silence sits at the epsilon floor.
        assert!((envelope.level_db[50] - (-200.0)).abs() < 1.0);
    }
}
