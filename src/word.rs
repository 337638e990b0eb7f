use serde::{Deserialize, Serialize};

/// A single timed word produced by an external transcription provider.
///
/// Serialized as `{ "text": "...", "timestamp": [start, end] }` with times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub timestamp: [f64; 2],
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            timestamp: [start, end],
        }
    }

    /// Start time in seconds.
    pub fn start(&self) -> f64 {
        self.timestamp[0]
    }

    /// End time in seconds.
    pub fn end(&self) -> f64 {
        self.timestamp[1]
    }

    pub fn timing(&self) -> WordTiming {
        WordTiming {
            start: self.start(),
            end: self.end(),
        }
    }
}

/// Start/end of a single word, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    pub start: f64,
    pub end: f64,
}
