/// The supported output formats for encoded extraction plans.
///
/// Each variant maps to a concrete `SegmentEncoder` implementation. With the `cli` feature the
/// enum doubles as a `clap` flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputType {
    /// Output segments as a JSON array.
    Json,

    /// Output segments as WebVTT chapter cues.
    Vtt,

    /// Output a human-readable extraction plan.
    Text,
}
