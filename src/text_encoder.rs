use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;

/// A `SegmentEncoder` that writes a human-readable extraction plan.
///
/// ```text
/// 1.mp3: 7.50s - 8.60s (1.10s)
///   Source: "One" at word 1 (sequential)
///   Number timing: 6.00s - 6.30s
///   Pauses: before=1.60s, after=1.20s
/// ```
pub struct TextEncoder<W: Write> {
    w: W,
    closed: bool,
}

impl<W: Write> TextEncoder<W> {
    pub fn new(w: W) -> Self {
        Self { w, closed: false }
    }
}

impl<W: Write> SegmentEncoder for TextEncoder<W> {
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        let bounds = &seg.segment_boundaries;
        let source = &seg.source_number;
        let detection = if source.is_structural {
            "structural"
        } else {
            "sequential"
        };

        writeln!(
            &mut self.w,
            "{}: {:.2}s - {:.2}s ({:.2}s)",
            seg.output_file, bounds.start, bounds.end, bounds.duration
        )?;
        writeln!(
            &mut self.w,
            "  Source: \"{}\" at word {} ({detection})",
            source.text.trim(),
            source.word_index
        )?;
        writeln!(
            &mut self.w,
            "  Number timing: {:.2}s - {:.2}s",
            source.timing.start, source.timing.end
        )?;
        writeln!(
            &mut self.w,
            "  Pauses: before={:.2}s, after={:.2}s",
            source.pauses.before_number, source.pauses.after_number
        )?;

        self.w.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;
        Ok(())
    }
}
