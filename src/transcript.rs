//! Loading transcriptions from JSON.
//!
//! Two shapes are accepted:
//! - a bare array of words: `[{ "text": "One", "timestamp": [6.0, 6.3] }, ...]`
//! - an ASR result object carrying the words under `chunks`: `{ "text": "...", "chunks": [...] }`
//!
//! Elements are checked one at a time so errors can name the offending index, then the whole
//! sequence goes through [`validate_words`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::Result;
use crate::error::ValidationError;
use crate::validate::validate_words;
use crate::word::Word;

/// Read and validate a transcription from any JSON byte stream.
pub fn from_reader<R: Read>(r: R) -> Result<Vec<Word>> {
    let value: Value = serde_json::from_reader(r)?;
    Ok(from_value(&value)?)
}

/// Parse and validate a transcription from a JSON string.
pub fn from_json_str(s: &str) -> Result<Vec<Word>> {
    let value: Value = serde_json::from_str(s)?;
    Ok(from_value(&value)?)
}

/// Read and validate a transcription from a JSON file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let file = File::open(path.as_ref())?;
    from_reader(BufReader::new(file))
}

/// Convert an already-parsed JSON value into validated words.
pub fn from_value(value: &Value) -> std::result::Result<Vec<Word>, ValidationError> {
    let elements = word_elements(value)?;

    let words = elements
        .iter()
        .enumerate()
        .map(|(index, element)| word_from_value(index, element))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    validate_words(&words)?;
    Ok(words)
}

fn word_elements(value: &Value) -> std::result::Result<&[Value], ValidationError> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Object(map) => match map.get("chunks") {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            _ => Err(ValidationError::NotASequence(
                "object has no `chunks` array".to_owned(),
            )),
        },
        other => Err(ValidationError::NotASequence(format!(
            "found {}",
            json_kind(other)
        ))),
    }
}

fn word_from_value(index: usize, value: &Value) -> std::result::Result<Word, ValidationError> {
    let text = match value.get("text").and_then(Value::as_str) {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ValidationError::MissingText { index }),
    };

    let timestamp = match value.get("timestamp").and_then(Value::as_array) {
        Some(ts) if ts.len() == 2 => ts,
        _ => return Err(ValidationError::MalformedTimestamp { index }),
    };

    match (timestamp[0].as_f64(), timestamp[1].as_f64()) {
        (Some(start), Some(end)) => Ok(Word::new(text, start, end)),
        _ => Err(ValidationError::MalformedTimestamp { index }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
