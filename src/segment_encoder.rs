use crate::Result;
use crate::segments::Segment;

/// Streams segments into some output format.
///
/// Callers own the encoder lifecycle: write every segment, then call `close` exactly once
/// (implementations tolerate repeated `close` calls).
pub trait SegmentEncoder {
    fn write_segment(&mut self, seg: &Segment) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}
