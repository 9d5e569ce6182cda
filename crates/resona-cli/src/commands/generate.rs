//! Test-signal generation, useful for exercising the analysis commands.

use clap::{Args, ValueEnum};
use resona_io::{WavSpec, write_wav};
use std::f32::consts::TAU;
use std::path::PathBuf;

/// Kinds of signal the generator can produce.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SignalKind {
    /// Steady sine tone
    Sine,
    /// Exponentially decaying sine
    Decay,
}

/// Generate a test WAV file.
#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    pub output: PathBuf,

    /// Signal kind
    #[arg(long, value_enum, default_value_t = SignalKind::Decay)]
    pub kind: SignalKind,

    /// Tone frequency in Hz
    #[arg(long, default_value = "1000")]
    pub freq: f32,

    /// Decay time constant in seconds (decay kind only)
    #[arg(long, default_value = "0.1")]
    pub tau: f32,

    /// Duration in seconds
    #[arg(long, default_value = "1.0")]
    pub duration: f32,

    /// Sample rate in Hz
    #[arg(long, default_value = "48000")]
    pub sample_rate: u32,
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let samples = synthesize(&args);

    write_wav(
        &args.output,
        &samples,
        WavSpec {
            sample_rate: args.sample_rate,
            bits_per_sample: 32,
        },
    )?;
    tracing::info!(
        path = %args.output.display(),
        samples = samples.len(),
        kind = ?args.kind,
        "wrote test signal"
    );

    println!(
        "Wrote {} samples ({:.2}s {:?} at {} Hz) to {}",
        samples.len(),
        args.duration,
        args.kind,
        args.freq,
        args.output.display()
    );
    Ok(())
}

fn synthesize(args: &GenerateArgs) -> Vec<f32> {
    let n = (args.duration * args.sample_rate as f32) as usize;
    let rate = args.sample_rate as f32;
    (0..n)
        .map(|i| {
            let t = i as f32 / rate;
            let tone = (TAU * args.freq * t).sin();
            match args.kind {
                SignalKind::Sine => tone,
                SignalKind::Decay => tone * (-t / args.tau).exp(),
            }
        })
        .collect()
}
