use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;

/// A `SegmentEncoder` that writes segments as a WebVTT chapter track.
///
/// Each segment becomes one cue: the output file name is the cue identifier and the spoken number
/// that anchored the segment is the cue text, e.g.
///
/// ```text
/// WEBVTT
///
/// 1.mp3
/// 00:00:07.500 --> 00:00:08.600
/// One
/// ```
///
/// The header is written lazily, so closing an encoder that never saw a segment writes nothing.
pub struct VttEncoder<W: Write> {
    w: W,
    started: bool,
    closed: bool,
}

impl<W: Write> VttEncoder<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            started: false,
            closed: false,
        }
    }

    fn start_if_needed(&mut self) -> Result<()> {
        if !self.started {
            self.w.write_all(b"WEBVTT\n\n")?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write> SegmentEncoder for VttEncoder<W> {
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        self.start_if_needed()?;

        let bounds = &seg.segment_boundaries;
        writeln!(&mut self.w, "{}", seg.output_file)?;
        writeln!(
            &mut self.w,
            "{} --> {}",
            format_timestamp_vtt(bounds.start),
            format_timestamp_vtt(bounds.end)
        )?;
        // ASR tokens often carry a leading space.
        writeln!(&mut self.w, "{}", seg.source_number.text.trim())?;
        writeln!(&mut self.w)?;

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

/// Format seconds as a WebVTT timestamp (`HH:MM:SS.mmm`), rounded to the nearest millisecond.
///
/// Negative inputs clamp to zero.
fn format_timestamp_vtt(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total_s = total_ms / 1000;

    let s = total_s % 60;
    let total_m = total_s / 60;

    let m = total_m % 60;
    let h = total_m / 60;

    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
