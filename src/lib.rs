//! `numsplit` — split a word-level transcription into numbered sections.
//!
//! Recordings such as listening exercises announce their sections with spoken numbers ("One …
//! Two … Three …"). Given the timed words of such a recording, this crate finds the numbers that
//! structure it and plans one audio cut per section: the phrase after each number, up to the next
//! number or the end of the recording.
//!
//! This crate provides:
//! - Transcript loading and validation
//! - Number word recognition (1–99, digits, ordinals, compound tens, common homophones)
//! - Adaptive pause thresholds and two-tier number detection
//! - Segment planning with advisory duration checks
//! - Pluggable plan encoders (JSON, VTT, text)
//!
//! Transcription itself, audio decoding/encoding and file delivery are left to the caller.

// High-level API (most consumers should start here).
pub mod extractor;
pub mod opts;

// Input model, loading, and validation.
pub mod transcript;
pub mod validate;
pub mod word;

// Detection and segmentation.
pub mod candidates;
pub mod numbers;
pub mod pauses;
pub mod segments;
pub mod threshold;

// Output selection and encoder interfaces.
pub mod output_type;
pub mod segment_encoder;

// Encoders that serialize segments into various formats.
pub mod json_array_encoder;
pub mod text_encoder;
pub mod vtt_encoder;

// Logging configuration for binaries.
#[cfg(feature = "logging")]
pub mod logging;

mod error;

pub use error::{Error, Result, ValidationError};
pub use extractor::{ExtractionPlan, Extractor, extract_segments};
pub use opts::Opts;
pub use output_type::OutputType;
pub use segments::Segment;
pub use word::Word;
