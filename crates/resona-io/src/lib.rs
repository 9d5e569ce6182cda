//! Audio file I/O for the Resona analyzer.
//!
//! The analysis core only consumes mono samples plus a sample rate; this
//! crate is the collaborator that produces them from WAV files:
//!
//! - [`read_wav_channels`] - per-channel f32 samples plus sample rate
//! - [`read_audio_buffer`] - convenience load straight into an [`resona_core::AudioBuffer`]
//! - [`read_wav_info`] - header-only metadata probe
//! - [`write_wav`] - mono writer used for generated test signals
//!
//! Compressed-format decoding stays out of scope; anything that can hand
//! the core raw channels works as a drop-in replacement for this crate.

mod wav;

pub use wav::{
    WavFormat, WavInfo, WavSpec, read_audio_buffer, read_wav_channels, read_wav_info, write_wav,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoded data was rejected by the analysis core.
    #[error(transparent)]
    Core(#[from] resona_core::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
