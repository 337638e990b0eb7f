//! Adaptive pause threshold estimation.
//!
//! Recordings are paced differently, so a fixed silence cutoff for "structural" numbers does not
//! transfer between them. We derive one per transcript from the longest pause observed next to
//! any number word.

use serde::Serialize;

use crate::numbers::is_number;
use crate::pauses::analyze_pauses;
use crate::word::Word;

/// Fraction of the longest observed pause used as the threshold.
const LONGEST_PAUSE_RATIO: f64 = 0.75;

pub const MIN_THRESHOLD_MS: f64 = 100.0;
pub const MAX_THRESHOLD_MS: f64 = 3000.0;

/// The effective pause threshold for one extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveThreshold {
    pub millis: f64,

    /// The pause the estimate was derived from, or `None` when the configured fallback was used.
    pub longest_pause_secs: Option<f64>,
}

impl AdaptiveThreshold {
    pub fn fallback(millis: u32) -> Self {
        Self {
            millis: f64::from(millis),
            longest_pause_secs: None,
        }
    }

    pub fn as_secs(&self) -> f64 {
        self.millis / 1000.0
    }

    pub fn is_estimated(&self) -> bool {
        self.longest_pause_secs.is_some()
    }
}

/// Every nonzero pause directly before or after a number word, in word order.
pub fn number_adjacent_pauses(words: &[Word]) -> Vec<f64> {
    words
        .iter()
        .enumerate()
        .filter(|(_, word)| is_number(&word.text))
        .flat_map(|(index, _)| {
            let pauses = analyze_pauses(words, index);
            [pauses.before_number, pauses.after_number]
        })
        .filter(|pause| *pause > 0.0)
        .collect()
}

/// Estimate the threshold as 75% of the longest number-adjacent pause, clamped to 100–3000 ms.
///
/// Falls back to `fallback_ms` when the transcript has no numbers or none of them border a pause.
pub fn estimate_threshold(words: &[Word], fallback_ms: u32) -> AdaptiveThreshold {
    let longest = number_adjacent_pauses(words)
        .into_iter()
        .max_by(f64::total_cmp);

    let Some(longest) = longest else {
        return AdaptiveThreshold::fallback(fallback_ms);
    };

    let millis = (longest * LONGEST_PAUSE_RATIO * 1000.0).clamp(MIN_THRESHOLD_MS, MAX_THRESHOLD_MS);
    AdaptiveThreshold {
        millis,
        longest_pause_secs: Some(longest),
    }
}
