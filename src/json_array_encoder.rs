use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;

/// Streams segments out as one JSON array, the format the packaging layer consumes.
///
/// The opening `[` is deferred until the first segment (or `close`), so a run that writes nothing
/// still yields `[]`.
///
/// Example output (abridged):
/// ```json
/// [
///   { "numberValue": 1, "outputFile": "1.mp3", "segmentBoundaries": { "start": 7.5, "end": 8.6, "duration": 1.1 }, ... },
///   { "numberValue": 2, "outputFile": "2.mp3", "segmentBoundaries": { "start": 11.5, "end": 11.9, "duration": 0.4 }, ... }
/// ]
/// ```
pub struct JsonArrayEncoder<W: Write> {
    w: W,
    started: bool,
    /// Number of segments written so far; decides comma placement.
    written: usize,
    closed: bool,
}

impl<W: Write> JsonArrayEncoder<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            started: false,
            written: 0,
            closed: false,
        }
    }

    fn open_array(&mut self) -> Result<()> {
        if !self.started {
            self.w.write_all(b"[")?;
            self.started = true;
        }
        Ok(())
    }
}

impl<W: Write> SegmentEncoder for JsonArrayEncoder<W> {
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        self.open_array()?;
        if self.written > 0 {
            self.w.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.w, seg)?;
        self.written += 1;

        // Flush per element so piped consumers see each instruction as soon as it exists.
        self.w.flush()?;
        Ok(())
    }

    /// Terminate the array. Safe to call more than once.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.open_array()?;
        self.w.write_all(b"]")?;
        self.w.flush()?;

        self.closed = true;
        Ok(())
    }
}
