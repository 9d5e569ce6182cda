//! Error types for signal-processing operations.

use thiserror::Error;

/// Errors produced by the analysis core.
///
/// All variants are local validation failures on malformed input and are
/// surfaced immediately to the caller; nothing here is transient or
/// retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raw input had a channel count the downmixer does not handle.
    #[error("unsupported channel layout: {channels} channels (expected 1 or 2)")]
    UnsupportedChannelLayout {
        /// Number of channels in the raw input.
        channels: usize,
    },

    /// Stereo input channels differ in length.
    #[error("mismatched channel lengths: left {left}, right {right}")]
    MismatchedChannels {
        /// Left channel sample count.
        left: usize,
        /// Right channel sample count.
        right: usize,
    },

    /// A sample rate of zero Hz was supplied.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// Band edges do not satisfy 0 < low < high < Nyquist.
    #[error("invalid band: {low_hz} Hz .. {high_hz} Hz (Nyquist {nyquist_hz} Hz)")]
    InvalidBand {
        /// Lower cutoff in Hz.
        low_hz: f32,
        /// Upper cutoff in Hz.
        high_hz: f32,
        /// Nyquist frequency of the signal in Hz.
        nyquist_hz: f32,
    },

    /// Filter order the biquad cascade cannot realize.
    #[error("invalid filter order {order} (must be even and at least 2)")]
    InvalidOrder {
        /// Requested order.
        order: usize,
    },

    /// Signal too short for zero-phase filtering at the requested order.
    #[error("insufficient samples for zero-phase filtering: {len} (need more than {required})")]
    InsufficientSamples {
        /// Actual sample count.
        len: usize,
        /// Minimum count that must be exceeded.
        required: usize,
    },

    /// An empty sample sequence was given to a transform.
    #[error("empty signal")]
    EmptySignal,

    /// Decay-search dB span that is not strictly increasing.
    #[error("invalid decay span: {start_db} dB .. {end_db} dB")]
    InvalidDecaySpan {
        /// Drop below the peak where the span starts, in dB.
        start_db: f32,
        /// Drop below the peak where the span ends, in dB.
        end_db: f32,
    },

    /// The decay search could not locate a usable post-peak region.
    #[error("no decay found after envelope peak")]
    NoDecayFound,
}

/// Convenience result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
