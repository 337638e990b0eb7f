use crate::output_type::OutputType;
use crate::{Error, Result};

/// Default pause threshold (ms), used when no pause around any number can be measured.
pub const DEFAULT_PAUSE_THRESHOLD_MS: u32 = 500;

/// Allowed range for the configured pause threshold (ms).
pub const PAUSE_THRESHOLD_RANGE_MS: std::ops::RangeInclusive<u32> = 100..=2000;

pub const DEFAULT_MIN_SEGMENT_DURATION_MS: u32 = 500;
pub const DEFAULT_MAX_SEGMENT_DURATION_MS: u32 = 60_000;

/// Options that control how an extraction is performed.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (tests, batch jobs) can construct options programmatically
///
/// An extraction never writes back into `Opts`. The adaptive threshold computed for a run is
/// returned in the plan instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Configured pause threshold in milliseconds (100–2000).
    ///
    /// Each run replaces this with an adaptive estimate derived from the transcript; the
    /// configured value is only used when no estimate can be made.
    pub pause_threshold_ms: u32,

    /// Segments shorter than this produce a duration warning.
    pub min_segment_duration_ms: u32,

    /// Segments longer than this produce a duration warning.
    pub max_segment_duration_ms: u32,

    /// When several occurrences of a number tie on every other criterion, pick the later one.
    ///
    /// Setting this to `false` picks the earliest occurrence instead.
    pub prefer_later_occurrences: bool,

    /// Emit verbose per-stage diagnostics through `tracing`. No effect on results.
    pub debug: bool,

    /// The desired output format for encoded plans.
    pub output_type: OutputType,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            pause_threshold_ms: DEFAULT_PAUSE_THRESHOLD_MS,
            min_segment_duration_ms: DEFAULT_MIN_SEGMENT_DURATION_MS,
            max_segment_duration_ms: DEFAULT_MAX_SEGMENT_DURATION_MS,
            prefer_later_occurrences: true,
            debug: false,
            output_type: OutputType::Json,
        }
    }
}

impl Opts {
    /// Check that the options describe a usable configuration.
    pub fn validate(&self) -> Result<()> {
        if !PAUSE_THRESHOLD_RANGE_MS.contains(&self.pause_threshold_ms) {
            return Err(Error::invalid_opts(format!(
                "pause threshold must be within {}..={} ms, got {}",
                PAUSE_THRESHOLD_RANGE_MS.start(),
                PAUSE_THRESHOLD_RANGE_MS.end(),
                self.pause_threshold_ms
            )));
        }

        if self.min_segment_duration_ms > self.max_segment_duration_ms {
            return Err(Error::invalid_opts(format!(
                "min segment duration ({} ms) exceeds max segment duration ({} ms)",
                self.min_segment_duration_ms, self.max_segment_duration_ms
            )));
        }

        Ok(())
    }

    pub(crate) fn min_segment_secs(&self) -> f64 {
        f64::from(self.min_segment_duration_ms) / 1000.0
    }

    pub(crate) fn max_segment_secs(&self) -> f64 {
        f64::from(self.max_segment_duration_ms) / 1000.0
    }
}
