//! Number candidate detection and selection.
//!
//! Detection runs in two tiers:
//! - **Structural**: number words followed by a pause at least as long as the adaptive
//!   threshold. Well-paced recordings expose their section markers this way.
//! - **Sequential**: every number word, regardless of pauses. Used when the structural tier
//!   cannot assemble a run of at least [`MIN_STRUCTURAL_RUN`] numbers.
//!
//! Within a tier, repeated occurrences of the same value are resolved to a single winner and the
//! winners are accepted as a contiguous run `1, 2, …, N`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::numbers::{MAX_NUMBER, MIN_NUMBER, parse_number};
use crate::pauses::{PauseAnalysis, analyze_pauses};
use crate::threshold::AdaptiveThreshold;
use crate::word::{Word, WordTiming};

/// A structural run shorter than this triggers the sequential fallback.
pub const MIN_STRUCTURAL_RUN: usize = 2;

/// Pause differences at or below this many seconds are treated as noise when ranking.
const PAUSE_NOISE_SECS: f64 = 0.1;

/// Which detection tier produced a candidate.
///
/// Ordered so that `Structural > Sequential`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Detection {
    Sequential,
    Structural,
}

/// One occurrence of a number word in the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberCandidate {
    pub number_value: u32,
    pub number_text: String,
    pub word_index: usize,
    pub timing: WordTiming,
    pub pauses: PauseAnalysis,
    pub detection: Detection,
}

impl NumberCandidate {
    pub fn is_structural(&self) -> bool {
        self.detection == Detection::Structural
    }

    /// Rank two occurrences of the same number. `Greater` means `self` is preferred.
    ///
    /// Criteria, in order:
    /// 1. structural beats sequential
    /// 2. the longer total pause wins when the difference exceeds 100 ms
    /// 3. the later word wins (or the earlier one when `prefer_later` is off)
    pub fn rank(&self, other: &Self, prefer_later: bool) -> Ordering {
        self.detection
            .cmp(&other.detection)
            .then_with(|| {
                let (a, b) = (self.pauses.total_duration, other.pauses.total_duration);
                if (a - b).abs() > PAUSE_NOISE_SECS {
                    a.total_cmp(&b)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| {
                if prefer_later {
                    self.word_index.cmp(&other.word_index)
                } else {
                    other.word_index.cmp(&self.word_index)
                }
            })
    }
}

/// Every number word in the transcript, in word order, tagged with `detection`.
fn number_occurrences(
    words: &[Word],
    detection: Detection,
) -> impl Iterator<Item = NumberCandidate> + '_ {
    words.iter().enumerate().filter_map(move |(index, word)| {
        let number_value = parse_number(&word.text)?;
        Some(NumberCandidate {
            number_value,
            number_text: word.text.clone(),
            word_index: index,
            timing: word.timing(),
            pauses: analyze_pauses(words, index),
            detection,
        })
    })
}

/// Number words whose following pause meets the threshold.
pub fn find_structural_candidates(
    words: &[Word],
    threshold: &AdaptiveThreshold,
) -> Vec<NumberCandidate> {
    let threshold_secs = threshold.as_secs();
    number_occurrences(words, Detection::Structural)
        .filter(|candidate| candidate.pauses.after_number >= threshold_secs)
        .collect()
}

/// All number words, regardless of pauses.
pub fn find_sequential_candidates(words: &[Word]) -> Vec<NumberCandidate> {
    number_occurrences(words, Detection::Sequential).collect()
}

/// Resolve duplicates and accept the contiguous run starting at 1.
///
/// Candidates are folded in the given order, so a challenger replaces the current winner only
/// when it ranks strictly higher. The run stops at the first missing value; anything after the
/// gap is dropped.
pub fn select_sequential(
    candidates: Vec<NumberCandidate>,
    prefer_later: bool,
) -> Vec<NumberCandidate> {
    let mut best: BTreeMap<u32, NumberCandidate> = BTreeMap::new();

    for candidate in candidates {
        let replaces = best
            .get(&candidate.number_value)
            .is_none_or(|current| candidate.rank(current, prefer_later) == Ordering::Greater);
        if replaces {
            best.insert(candidate.number_value, candidate);
        }
    }

    let mut run = Vec::new();
    for value in MIN_NUMBER..=MAX_NUMBER {
        match best.remove(&value) {
            Some(candidate) => run.push(candidate),
            None => break,
        }
    }
    run
}
