//! High-level API for planning segment extraction.
//!
//! `Extractor` wires the pieces together:
//! threshold estimation → structural detection → (sequential fallback) → segment building →
//! duration checks.
//!
//! Every stage is a pure function of the transcript and the options, so one `Extractor` can be
//! asked for its plan any number of times and always answers the same way. The adaptive threshold
//! lives only for the duration of a call; `Opts` is never written to.

use std::io::{BufWriter, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::candidates::{
    Detection, MIN_STRUCTURAL_RUN, NumberCandidate, find_sequential_candidates,
    find_structural_candidates, select_sequential,
};
use crate::json_array_encoder::JsonArrayEncoder;
use crate::opts::Opts;
use crate::output_type::OutputType;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::{DurationWarning, Segment, build_segments, check_durations};
use crate::text_encoder::TextEncoder;
use crate::threshold::{AdaptiveThreshold, estimate_threshold};
use crate::validate::validate_words;
use crate::vtt_encoder::VttEncoder;
use crate::word::Word;
use crate::{Error, Result};

/// Everything one extraction run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionPlan {
    /// The pause threshold used for structural detection.
    pub threshold: AdaptiveThreshold,

    /// The tier whose run was accepted.
    pub detection: Detection,

    pub segments: Vec<Segment>,

    /// Segments outside the configured duration bounds. Informational only.
    pub warnings: Vec<DurationWarning>,
}

/// The main extraction entry point.
///
/// Construction validates both the transcript and the options, so a constructed `Extractor`
/// only fails later when the transcript contains no usable number run.
#[derive(Debug, Clone)]
pub struct Extractor {
    words: Vec<Word>,
    opts: Opts,
}

impl Extractor {
    pub fn new(words: Vec<Word>, opts: Opts) -> Result<Self> {
        opts.validate()?;
        validate_words(&words)?;

        if opts.debug {
            debug!(words = words.len(), ?opts, "extractor initialized");
        }

        Ok(Self { words, opts })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// Run the full pipeline and return the plan.
    pub fn plan(&self) -> Result<ExtractionPlan> {
        let result = self.run();
        if let Err(err) = &result {
            self.trace(|| debug!(error = %err, "extraction failed"));
        }
        result
    }

    /// Run the full pipeline and return only the segments.
    pub fn extract(&self) -> Result<Vec<Segment>> {
        Ok(self.plan()?.segments)
    }

    /// Run the pipeline and encode the segments into `w` using `opts.output_type`.
    ///
    /// The encoder is closed even if extraction fails, so JSON output is still well-formed.
    pub fn write_plan<W: Write>(&self, w: W) -> Result<ExtractionPlan> {
        let writer = BufWriter::new(w);

        match self.opts.output_type {
            OutputType::Json => {
                let mut encoder = JsonArrayEncoder::new(writer);
                let run_res = self.plan_with_encoder(&mut encoder);
                merge_run_and_close(run_res, encoder.close())
            }
            OutputType::Vtt => {
                let mut encoder = VttEncoder::new(writer);
                let run_res = self.plan_with_encoder(&mut encoder);
                merge_run_and_close(run_res, encoder.close())
            }
            OutputType::Text => {
                let mut encoder = TextEncoder::new(writer);
                let run_res = self.plan_with_encoder(&mut encoder);
                merge_run_and_close(run_res, encoder.close())
            }
        }
    }

    fn plan_with_encoder<E: SegmentEncoder>(&self, encoder: &mut E) -> Result<ExtractionPlan> {
        let plan = self.plan()?;
        for segment in &plan.segments {
            encoder.write_segment(segment)?;
        }
        Ok(plan)
    }

    fn run(&self) -> Result<ExtractionPlan> {
        let threshold = estimate_threshold(&self.words, self.opts.pause_threshold_ms);
        self.trace(|| {
            debug!(
                threshold_ms = threshold.millis,
                longest_pause_secs = ?threshold.longest_pause_secs,
                "adaptive threshold estimated"
            )
        });

        let (detection, accepted) = self.detect(&threshold);
        if accepted.is_empty() {
            return Err(Error::NoNumbersFound);
        }

        let transcript_end = self.words.last().map_or(0.0, Word::end);
        let segments = build_segments(&accepted, transcript_end);

        let warnings = check_durations(&segments, &self.opts);
        for warning in &warnings {
            warn!(
                number = warning.number_value,
                duration_secs = warning.duration_secs,
                "{warning}"
            );
        }

        info!(
            segments = segments.len(),
            detection = ?detection,
            threshold_ms = threshold.millis,
            "extraction planned"
        );

        Ok(ExtractionPlan {
            threshold,
            detection,
            segments,
            warnings,
        })
    }

    /// Structural detection first; fall back to every number word when the structural run is
    /// too short.
    fn detect(&self, threshold: &AdaptiveThreshold) -> (Detection, Vec<NumberCandidate>) {
        let prefer_later = self.opts.prefer_later_occurrences;

        let structural = select_sequential(
            find_structural_candidates(&self.words, threshold),
            prefer_later,
        );
        self.trace(|| {
            debug!(
                accepted = ?numbers(&structural),
                "structural detection finished"
            )
        });

        if structural.len() >= MIN_STRUCTURAL_RUN {
            return (Detection::Structural, structural);
        }

        let sequential = select_sequential(find_sequential_candidates(&self.words), prefer_later);
        self.trace(|| {
            debug!(
                structural = structural.len(),
                accepted = ?numbers(&sequential),
                "insufficient structural numbers, used sequential fallback"
            )
        });

        (Detection::Sequential, sequential)
    }

    /// Emit verbose diagnostics only when `opts.debug` is set.
    fn trace(&self, emit: impl FnOnce()) {
        if self.opts.debug {
            emit();
        }
    }
}

/// One-shot convenience: validate, extract, and return the segments.
pub fn extract_segments(words: &[Word], opts: &Opts) -> Result<Vec<Segment>> {
    Extractor::new(words.to_vec(), opts.clone())?.extract()
}

fn numbers(run: &[NumberCandidate]) -> Vec<u32> {
    run.iter().map(|c| c.number_value).collect()
}

fn merge_run_and_close(
    run_res: Result<ExtractionPlan>,
    close_res: Result<()>,
) -> Result<ExtractionPlan> {
    match (run_res, close_res) {
        (Ok(plan), Ok(())) => Ok(plan),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => Err(Error::msg(format!(
            "{err} (closing output also failed: {close_err})"
        ))),
    }
}
