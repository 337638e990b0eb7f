use serde::{Deserialize, Serialize};

use crate::word::Word;

/// Silence around a single word, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseAnalysis {
    pub before_number: f64,
    pub after_number: f64,
    /// `before_number + after_number`.
    pub total_duration: f64,
}

/// Gap between the previous word's end and this word's start, or 0 at the first word.
pub fn pause_before(words: &[Word], index: usize) -> f64 {
    if index == 0 || index >= words.len() {
        return 0.0;
    }
    (words[index].start() - words[index - 1].end()).max(0.0)
}

/// Gap between this word's end and the next word's start, or 0 at the last word.
pub fn pause_after(words: &[Word], index: usize) -> f64 {
    if index + 1 >= words.len() {
        return 0.0;
    }
    (words[index + 1].start() - words[index].end()).max(0.0)
}

pub fn analyze_pauses(words: &[Word], index: usize) -> PauseAnalysis {
    let before_number = pause_before(words, index);
    let after_number = pause_after(words, index);
    PauseAnalysis {
        before_number,
        after_number,
        total_duration: before_number + after_number,
    }
}
