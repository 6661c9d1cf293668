use crate::line_sink::LineSink;
use std::io::{self, Write};

/// Sink writing each line to the process standard error stream.
///
/// Lines are written under the stream's process-wide lock, so they do not
/// interleave with other users of [`std::io::stderr`] that also lock it.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(line)?;
        stderr.flush()
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}
