//! Band-limited magnitude spectrum of an audio file.

use clap::{Args, ValueEnum};
use resona_analysis::{Spectrum, spectrum};
use resona_core::BandSelector;
use resona_io::read_audio_buffer;
use std::io::Write;
use std::path::PathBuf;

/// Named band choices exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BandArg {
    /// 20-200 Hz
    Low,
    /// 200-2000 Hz
    Mid,
    /// 2-20 kHz
    High,
    /// Full unfiltered spectrum
    Combined,
}

impl From<BandArg> for BandSelector {
    fn from(arg: BandArg) -> Self {
        match arg {
            BandArg::Low => BandSelector::Low,
            BandArg::Mid => BandSelector::Mid,
            BandArg::High => BandSelector::High,
            BandArg::Combined => BandSelector::Combined,
        }
    }
}

/// Compute the spectrum of an audio file.
#[derive(Args)]
pub struct SpectrumArgs {
    /// Input WAV file
    pub input: PathBuf,

    /// Frequency band to isolate before the transform
    #[arg(long, value_enum, default_value_t = BandArg::Combined)]
    pub band: BandArg,

    /// Band-pass filter order
    #[arg(long, default_value = "4")]
    pub order: usize,

    /// Show top N spectral peaks
    #[arg(long, default_value = "10")]
    pub peaks: usize,

    /// Output CSV file (frequency_hz,magnitude)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the spectrum command.
pub fn run(args: SpectrumArgs) -> anyhow::Result<()> {
    let buffer = read_audio_buffer(&args.input)?;
    println!(
        "{}: {} samples, {} Hz, {:.2}s",
        args.input.display(),
        buffer.len(),
        buffer.sample_rate(),
        buffer.duration_secs()
    );

    let result = spectrum::analyze_band(&buffer, args.band.into(), args.order)?;
    tracing::info!(
        band = ?args.band,
        order = args.order,
        bins = result.len(),
        "spectrum computed"
    );

    println!("Top {} peaks ({:?} band):", args.peaks, args.band);
    for (freq, mag) in top_peaks(&result, args.peaks) {
        println!("  {freq:>10.1} Hz  {mag:>12.1}");
    }

    if let Some(path) = args.output {
        let mut file = std::fs::File::create(&path)?;
        writeln!(file, "frequency_hz,magnitude")?;
        for (freq, mag) in result.frequencies.iter().zip(result.magnitudes.iter()) {
            writeln!(file, "{freq:.6},{mag:.6}")?;
        }
        println!("Wrote {} bins to {}", result.len(), path.display());
    }

    Ok(())
}

/// Local spectral maxima sorted by descending magnitude.
fn top_peaks(spectrum: &Spectrum, count: usize) -> Vec<(f32, f32)> {
    let mags = &spectrum.magnitudes;
    let mut peaks: Vec<(f32, f32)> = (1..mags.len().saturating_sub(1))
        .filter(|&i| mags[i] > mags[i - 1] && mags[i] > mags[i + 1])
        .map(|i| (spectrum.frequencies[i], mags[i]))
        .collect();
    peaks.sort_by(|a, b| b.1.total_cmp(&a.1));
    peaks.truncate(count);
    peaks
}
