use std::io;
use std::sync::Arc;

/// Destination that accepts complete, newline-terminated log lines.
///
/// Implementations must write the whole line as one unit: concurrent callers
/// may rely on their lines never being torn or interleaved. The line is
/// flushed before the call returns so a reader that re-reads the destination
/// from the start observes every line written so far.
pub trait LineSink: Send + Sync {
    /// Writes `line` in full and flushes it.
    fn write_line(&self, line: &[u8]) -> io::Result<()>;

    /// Flushes any data buffered by the destination.
    fn flush(&self) -> io::Result<()>;
}

impl<S> LineSink for Arc<S>
where
    S: LineSink + ?Sized,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S> LineSink for Box<S>
where
    S: LineSink + ?Sized,
{
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
