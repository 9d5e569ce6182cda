//! Resona Core - signal-processing primitives for audio analysis
//!
//! This crate holds the reusable building blocks of the Resona analyzer:
//!
//! - [`buffer`] - Mono [`AudioBuffer`] construction and channel downmixing
//! - [`bands`] - [`FrequencyBand`] cutoff pairs and the named-band catalog
//! - [`biquad`] - Second-order IIR sections (RBJ cookbook coefficients)
//! - [`filter`] - Zero-phase Butterworth band-pass built from biquad cascades
//! - [`nearest`] - Nearest-value and argmax search helpers
//! - [`error`] - The [`Error`] type shared by all analysis operations
//!
//! Everything here is a pure function over in-memory buffers: no I/O, no
//! shared state, no logging. Calls are independent and reentrant.
//!
//! # Example
//!
//! ```rust
//! use resona_core::{AudioBuffer, FrequencyBand, bandpass_zero_phase};
//!
//! let channels = vec![vec![0.0f32; 4096], vec![0.0f32; 4096]];
//! let buffer = AudioBuffer::from_channels(&channels, 48000)?;
//!
//! let band = FrequencyBand::new(200.0, 2000.0);
//! let filtered = bandpass_zero_phase(&buffer, band, 4)?;
//! assert_eq!(filtered.len(), buffer.len());
//! # Ok::<(), resona_core::Error>(())
//! ```

pub mod bands;
pub mod biquad;
pub mod buffer;
pub mod error;
pub mod filter;
pub mod nearest;

pub use bands::{BandSelector, FrequencyBand, audio_bands};
pub use biquad::Biquad;
pub use buffer::AudioBuffer;
pub use error::{Error, Result};
pub use filter::{DEFAULT_ORDER, bandpass_zero_phase, min_samples};
pub use nearest::{argmax, nearest};
