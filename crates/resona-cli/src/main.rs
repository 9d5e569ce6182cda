//! Resona CLI - command-line interface for the Resona audio analyzer.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "resona")]
#[command(author, version, about = "Audio spectrum and reverberation analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display WAV file metadata
    Info(commands::info::InfoArgs),

    /// Compute the magnitude spectrum of an audio file
    Spectrum(commands::spectrum::SpectrumArgs),

    /// Estimate the RT60 reverberation time
    Rt60(commands::rt60::Rt60Args),

    /// Generate synthetic test signals
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Spectrum(args) => commands::spectrum::run(args),
        Commands::Rt60(args) => commands::rt60::run(args),
        Commands::Generate(args) => commands::generate::run(args),
    }
}
