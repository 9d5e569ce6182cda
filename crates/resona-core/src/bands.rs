//! Frequency band definitions and the named-band catalog.

/// A band-pass region given by its cutoff pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    /// Lower cutoff frequency in Hz.
    pub low_hz: f32,
    /// Upper cutoff frequency in Hz.
    pub high_hz: f32,
}

impl FrequencyBand {
    /// Create a new frequency band.
    pub const fn new(low_hz: f32, high_hz: f32) -> Self {
        Self { low_hz, high_hz }
    }

    /// Geometric center frequency of the band.
    pub fn center_hz(&self) -> f32 {
        (self.low_hz * self.high_hz).sqrt()
    }

    /// Bandwidth in Hz.
    pub fn bandwidth(&self) -> f32 {
        self.high_hz - self.low_hz
    }

    /// Whether 0 < low < high < nyquist holds for a given signal.
    pub fn is_valid_for(&self, nyquist_hz: f32) -> bool {
        self.low_hz > 0.0 && self.low_hz < self.high_hz && self.high_hz < nyquist_hz
    }
}

/// Named audio bands used by the spectrum display.
pub mod audio_bands {
    use super::FrequencyBand;

    /// Low band (20-200 Hz): bass content.
    pub const LOW: FrequencyBand = FrequencyBand::new(20.0, 200.0);

    /// Mid band (200-2000 Hz): vocal and instrument fundamentals.
    pub const MID: FrequencyBand = FrequencyBand::new(200.0, 2000.0);

    /// High band (2-20 kHz): presence and air.
    pub const HIGH: FrequencyBand = FrequencyBand::new(2000.0, 20000.0);

    /// All named bands in order of increasing frequency.
    pub const ALL: [FrequencyBand; 3] = [LOW, MID, HIGH];
}

/// Closed set of band selections for spectrum display.
///
/// `Combined` means the unfiltered full spectrum, not a union of the
/// filtered bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSelector {
    /// 20-200 Hz.
    Low,
    /// 200-2000 Hz.
    Mid,
    /// 2-20 kHz.
    High,
    /// No filtering; the full spectrum.
    Combined,
}

impl BandSelector {
    /// The cutoff pair for this selection, or `None` for `Combined`.
    pub fn band(self) -> Option<FrequencyBand> {
        match self {
            BandSelector::Low => Some(audio_bands::LOW),
            BandSelector::Mid => Some(audio_bands::MID),
            BandSelector::High => Some(audio_bands::HIGH),
            BandSelector::Combined => None,
        }
    }
}
