//! Reverberation-time estimation for an audio file.

use anyhow::Context;
use clap::Args;
use resona_analysis::reverb::{self, Rt60Config};
use resona_core::DEFAULT_ORDER;
use resona_io::read_audio_buffer;
use std::path::PathBuf;

/// Estimate RT60 around a target frequency.
#[derive(Args)]
pub struct Rt60Args {
    /// Input WAV file
    pub input: PathBuf,

    /// Frequency to analyze, in Hz
    #[arg(long, default_value = "1000")]
    pub target_hz: f32,

    /// Half-width of the band around the target, in Hz
    #[arg(long, default_value = "50")]
    pub half_band_hz: f32,

    /// Decay span below the peak, in dB, as "start,end"
    #[arg(long, default_value = "5,25", value_parser = parse_span)]
    pub span: (f32, f32),

    /// Band-pass filter order
    #[arg(long, default_value_t = DEFAULT_ORDER)]
    pub order: usize,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_span(s: &str) -> Result<(f32, f32), String> {
    let (start, end) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"start,end\", got \"{s}\""))?;
    let start: f32 = start
        .trim()
        .parse()
        .map_err(|e| format!("invalid start dB: {e}"))?;
    let end: f32 = end
        .trim()
        .parse()
        .map_err(|e| format!("invalid end dB: {e}"))?;
    Ok((start, end))
}

/// Run the rt60 command.
pub fn run(args: Rt60Args) -> anyhow::Result<()> {
    let buffer = read_audio_buffer(&args.input)?;

    let config = Rt60Config {
        target_hz: args.target_hz,
        half_band_hz: args.half_band_hz,
        drop_start_db: args.span.0,
        drop_end_db: args.span.1,
        filter_order: args.order,
    };

    let analysis = reverb::estimate_rt60(&buffer, &config)
        .with_context(|| format!("rt60 estimation failed for {}", args.input.display()))?;
    let result = &analysis.result;
    let envelope = &analysis.envelope;
    tracing::info!(
        target_hz = result.target_frequency_hz,
        rt60_seconds = result.rt60_seconds,
        "rt60 estimated"
    );

    if args.json {
        let json = serde_json::json!({
            "file": args.input.display().to_string(),
            "target_frequency_hz": result.target_frequency_hz,
            "rt60_seconds": result.rt60_seconds,
            "peak_time_s": envelope.time[result.peak_index],
            "drop_start_time_s": envelope.time[result.drop_start_index],
            "drop_end_time_s": envelope.time[result.drop_end_index],
            "drop_span_db": [config.drop_start_db, config.drop_end_db],
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}:", args.input.display());
        println!("  Target:   {:.1} Hz", result.target_frequency_hz);
        println!("  RT60:     {:.2} s", result.rt60_seconds);
        println!(
            "  Peak:     {:.3} s ({:.1} dB)",
            envelope.time[result.peak_index],
            envelope.level_db[result.peak_index]
        );
        println!(
            "  -{:.0} dB:   {:.3} s",
            config.drop_start_db,
            envelope.time[result.drop_start_index]
        );
        println!(
            "  -{:.0} dB:  {:.3} s",
            config.drop_end_db,
            envelope.time[result.drop_end_index]
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_span() {
        assert_eq!(parse_span("5,25").unwrap(), (5.0, 25.0));
        assert_eq!(parse_span(" 10 , 30 ").unwrap(), (10.0, 30.0));
        assert!(parse_span("5").is_err());
        assert!(parse_span("a,b").is_err());
    }

    #[test]
    fn test_generate_then_estimate_roundtrip() {
        use crate::commands::generate::{self, GenerateArgs, SignalKind};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decay.wav");
        let tau = 0.1;

        generate::run(GenerateArgs {
            output: path.clone(),
            kind: SignalKind::Decay,
            freq: 1000.0,
            tau,
            duration: 1.0,
            sample_rate: 48000,
        })
        .unwrap();

        run(Rt60Args {
            input: path.clone(),
            target_hz: 1000.0,
            half_band_hz: 50.0,
            span: (5.0, 25.0),
            order: 4,
            json: true,
        })
        .unwrap();

        // The written file should carry the same decay the generator
        // synthesized: rt60 of exp(-t/tau) is 6.91 * tau.
        let buffer = read_audio_buffer(&path).unwrap();
        let analysis = reverb::estimate_rt60(&buffer, &Rt60Config::default()).unwrap();
        let expected = 6.91 * tau;
        let error = (analysis.result.rt60_seconds - expected).abs() / expected;
        assert!(error < 0.15, "rt60 {} vs {expected}", analysis.result.rt60_seconds);
    }
}
