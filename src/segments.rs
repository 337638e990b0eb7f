use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candidates::NumberCandidate;
use crate::opts::Opts;
use crate::pauses::PauseAnalysis;
use crate::word::WordTiming;

/// Extension appended to each segment's output file name.
const OUTPUT_EXTENSION: &str = "mp3";

/// One extraction instruction: the phrase spoken after a number, up to the next number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub number_value: u32,
    pub output_file: String,
    pub segment_boundaries: SegmentBoundaries,
    pub source_number: SourceNumber,
}

/// Time range to cut from the source audio, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBoundaries {
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

/// The number occurrence a segment was anchored on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNumber {
    pub text: String,
    pub word_index: usize,
    pub timing: WordTiming,
    pub pauses: PauseAnalysis,
    pub is_structural: bool,
}

pub fn output_file_name(number_value: u32) -> String {
    format!("{number_value}.{OUTPUT_EXTENSION}")
}

/// Turn an accepted run of numbers into segments.
///
/// Each phrase starts where the silence after its number ends, and stops where the silence before
/// the next number begins. The last phrase runs to `transcript_end`.
pub fn build_segments(accepted: &[NumberCandidate], transcript_end: f64) -> Vec<Segment> {
    accepted
        .iter()
        .enumerate()
        .map(|(i, number)| {
            let start = number.timing.end + number.pauses.after_number;
            let end = match accepted.get(i + 1) {
                Some(next) => next.timing.start - next.pauses.before_number,
                None => transcript_end,
            };

            Segment {
                number_value: number.number_value,
                output_file: output_file_name(number.number_value),
                segment_boundaries: SegmentBoundaries {
                    start,
                    end,
                    duration: end - start,
                },
                source_number: SourceNumber {
                    text: number.number_text.clone(),
                    word_index: number.word_index,
                    timing: number.timing,
                    pauses: number.pauses,
                    is_structural: number.is_structural(),
                },
            }
        })
        .collect()
}

/// A segment whose duration falls outside the configured bounds.
///
/// Advisory only: segments are never dropped or clamped because of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationWarning {
    pub number_value: u32,
    pub duration_secs: f64,
    pub kind: DurationWarningKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum DurationWarningKind {
    #[serde(rename_all = "camelCase")]
    TooShort { min_secs: f64 },
    #[serde(rename_all = "camelCase")]
    TooLong { max_secs: f64 },
}

impl fmt::Display for DurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DurationWarningKind::TooShort { min_secs } => write!(
                f,
                "segment {} too short: {:.2}s (min {:.2}s)",
                self.number_value, self.duration_secs, min_secs
            ),
            DurationWarningKind::TooLong { max_secs } => write!(
                f,
                "segment {} too long: {:.2}s (max {:.2}s)",
                self.number_value, self.duration_secs, max_secs
            ),
        }
    }
}

/// Flag segments shorter than the configured minimum or longer than the maximum.
pub fn check_durations(segments: &[Segment], opts: &Opts) -> Vec<DurationWarning> {
    let (min_secs, max_secs) = (opts.min_segment_secs(), opts.max_segment_secs());

    segments
        .iter()
        .filter_map(|segment| {
            let duration_secs = segment.segment_boundaries.duration;
            let kind = if duration_secs < min_secs {
                DurationWarningKind::TooShort { min_secs }
            } else if duration_secs > max_secs {
                DurationWarningKind::TooLong { max_secs }
            } else {
                return None;
            };

            Some(DurationWarning {
                number_value: segment.number_value,
                duration_secs,
                kind,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::Detection;

    fn number(
        value: u32,
        index: usize,
        start: f64,
        end: f64,
        before: f64,
        after: f64,
    ) -> NumberCandidate {
        NumberCandidate {
            number_value: value,
            number_text: format!("n{value}"),
            word_index: index,
            timing: WordTiming { start, end },
            pauses: PauseAnalysis {
                before_number: before,
                after_number: after,
                total_duration: before + after,
            },
            detection: Detection::Structural,
        }
    }

    fn segment_with_duration(value: u32, duration: f64) -> Segment {
        build_segments(&[number(value, 0, 0.0, 0.5, 0.0, 0.5)], 1.0 + duration).remove(0)
    }

    #[test]
    fn phrases_span_the_silence_between_numbers() {
        let accepted = vec![
            number(1, 1, 6.0, 6.5, 1.5, 1.0),
            number(2, 5, 10.0, 10.25, 1.25, 1.25),
        ];
        let segments = build_segments(&accepted, 12.0);

        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0].segment_boundaries,
            SegmentBoundaries {
                start: 7.5,
                end: 8.75,
                duration: 1.25
            }
        );
        assert_eq!(
            segments[1].segment_boundaries,
            SegmentBoundaries {
                start: 11.5,
                end: 12.0,
                duration: 0.5
            }
        );
    }

    #[test]
    fn names_output_files_after_numbers() {
        let accepted = vec![
            number(1, 0, 0.0, 0.5, 0.0, 0.5),
            number(2, 3, 2.0, 2.5, 0.5, 0.5),
        ];
        let segments = build_segments(&accepted, 4.0);
        assert_eq!(segments[0].output_file, "1.mp3");
        assert_eq!(segments[1].output_file, "2.mp3");
        assert_eq!(segments[1].source_number.text, "n2");
        assert_eq!(segments[1].source_number.word_index, 3);
        assert!(segments[1].source_number.is_structural);
    }

    #[test]
    fn serializes_with_camel_case_fields() -> anyhow::Result<()> {
        let segments = build_segments(&[number(1, 0, 0.0, 0.5, 0.0, 0.5)], 2.0);
        let json = serde_json::to_value(&segments[0])?;
        assert_eq!(json["numberValue"], 1);
        assert_eq!(json["outputFile"], "1.mp3");
        assert_eq!(json["segmentBoundaries"]["start"], 1.0);
        assert_eq!(json["sourceNumber"]["pauses"]["afterNumber"], 0.5);
        assert_eq!(json["sourceNumber"]["isStructural"], true);
        Ok(())
    }

    #[test]
    fn warns_on_out_of_bounds_durations() {
        let opts = Opts {
            min_segment_duration_ms: 500,
            max_segment_duration_ms: 4_000,
            ..Opts::default()
        };
        let segments = vec![
            segment_with_duration(1, 0.25),
            segment_with_duration(2, 2.0),
            segment_with_duration(3, 5.0),
        ];

        let warnings = check_durations(&segments, &opts);
        assert_eq!(
            warnings,
            vec![
                DurationWarning {
                    number_value: 1,
                    duration_secs: 0.25,
                    kind: DurationWarningKind::TooShort { min_secs: 0.5 },
                },
                DurationWarning {
                    number_value: 3,
                    duration_secs: 5.0,
                    kind: DurationWarningKind::TooLong { max_secs: 4.0 },
                },
            ]
        );
        assert_eq!(
            warnings[0].to_string(),
            "segment 1 too short: 0.25s (min 0.50s)"
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let opts = Opts::default();
        let segments = vec![segment_with_duration(1, 0.5), segment_with_duration(2, 60.0)];
        assert!(check_durations(&segments, &opts).is_empty());
    }
}
