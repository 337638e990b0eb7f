use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use std::io;

use numsplit::opts::{
    DEFAULT_MAX_SEGMENT_DURATION_MS, DEFAULT_MIN_SEGMENT_DURATION_MS, DEFAULT_PAUSE_THRESHOLD_MS,
};
use numsplit::{Extractor, Opts, OutputType, logging, transcript};

fn main() -> Result<()> {
    let params = Params::parse();
    logging::init(if params.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    });

    let words = if params.transcript_path == "-" {
        transcript::from_reader(io::stdin().lock()).context("failed to read transcript from stdin")?
    } else {
        transcript::from_path(&params.transcript_path)
            .with_context(|| format!("failed to read transcript '{}'", params.transcript_path))?
    };

    let opts = Opts {
        pause_threshold_ms: params.pause_threshold_ms,
        min_segment_duration_ms: params.min_segment_duration_ms,
        max_segment_duration_ms: params.max_segment_duration_ms,
        prefer_later_occurrences: params.prefer_later,
        debug: params.debug,
        output_type: params.output_type,
    };

    let extractor = Extractor::new(words, opts)?;
    let stdout = io::stdout();
    extractor.write_plan(stdout.lock())?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "numsplit")]
#[command(about = "Plan audio cuts from a transcript with spoken section numbers")]
struct Params {
    /// Path to a JSON transcript of timed words, or `-` for stdin.
    #[arg(short = 'i', long = "transcript", default_value = "-")]
    pub transcript_path: String,

    #[arg(
        short = 'o',
        long = "output-type",
        value_enum,
        default_value_t = OutputType::Json
    )]
    pub output_type: OutputType,

    /// Fallback pause threshold (ms) when no pause around a number can be measured.
    #[arg(
        long = "pause-threshold",
        default_value_t = DEFAULT_PAUSE_THRESHOLD_MS,
        value_parser = clap::value_parser!(u32).range(100..=2000)
    )]
    pub pause_threshold_ms: u32,

    #[arg(long = "min-segment-duration", default_value_t = DEFAULT_MIN_SEGMENT_DURATION_MS)]
    pub min_segment_duration_ms: u32,

    #[arg(long = "max-segment-duration", default_value_t = DEFAULT_MAX_SEGMENT_DURATION_MS)]
    pub max_segment_duration_ms: u32,

    /// Break ties between repeated numbers in favour of the later occurrence.
    #[arg(long = "prefer-later", default_value_t = true, action = clap::ArgAction::Set)]
    pub prefer_later: bool,

    #[arg(long = "debug", default_value_t = false)]
    pub debug: bool,
}
