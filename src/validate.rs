//! Input validation for word sequences.
//!
//! Validation never mutates or reorders the words. Time ordering is assumed, not checked.

use crate::error::ValidationError;
use crate::word::Word;

/// Reject transcriptions that cannot be analyzed.
///
/// Fails on an empty sequence, on a word with empty text, and on a word whose timestamps are
/// non-finite or not strictly increasing. The first offending index is reported.
pub fn validate_words(words: &[Word]) -> Result<(), ValidationError> {
    if words.is_empty() {
        return Err(ValidationError::Empty);
    }

    for (index, word) in words.iter().enumerate() {
        validate_word(index, word)?;
    }

    Ok(())
}

fn validate_word(index: usize, word: &Word) -> Result<(), ValidationError> {
    if word.text.is_empty() {
        return Err(ValidationError::MissingText { index });
    }

    let (start, end) = (word.start(), word.end());
    if !start.is_finite() || !end.is_finite() {
        return Err(ValidationError::NonFiniteTimestamp { index });
    }
    if start >= end {
        return Err(ValidationError::InvertedTimestamp { index, start, end });
    }

    Ok(())
}
