//! Resona Analysis - spectral analysis and reverberation measurement
//!
//! This crate turns mono [`resona_core::AudioBuffer`]s into display-ready
//! analysis artifacts:
//!
//! - [`fft`] - FFT wrapper over rustfft
//! - [`spectrum`] - Magnitude spectrum and named-band spectra
//! - [`envelope`] - Analytic-signal amplitude extraction
//! - [`reverb`] - RT60 estimation via the max-minus-N-dB decay method
//!
//! # Example
//!
//! ```rust,ignore
//! use resona_analysis::{reverb, spectrum};
//! use resona_core::{AudioBuffer, BandSelector};
//!
//! let buffer = AudioBuffer::from_channels(&channels, sample_rate)?;
//!
//! // Spectrum of the mid band, to plot.
//! let mid = spectrum::analyze_band(&buffer, BandSelector::Mid, 4)?;
//!
//! // Reverberation time around 1 kHz.
//! let analysis = reverb::estimate_rt60(&buffer, &reverb::Rt60Config::default())?;
//! println!("RT60: {:.2} s", analysis.result.rt60_seconds);
//! ```

pub mod envelope;
pub mod fft;
pub mod reverb;
pub mod spectrum;

pub use envelope::analytic_amplitude;
pub use fft::Fft;
pub use reverb::{DecayEnvelope, Rt60Analysis, Rt60Config, Rt60Result, decay_envelope, estimate_rt60};
pub use spectrum::{Spectrum, analyze, analyze_band};
