use super::SharedSink;
use crate::line_sink::LineSink;
use std::io::{self, Write};

impl<W> LineSink for SharedSink<W>
where
    W: Write + Send,
{
    /// Writes the line and flushes it while holding the writer lock.
    ///
    /// The lock is held across both calls, so a partially written line is
    /// never visible to another handle.
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut writer = self.lock_writer();
        writer.write_all(line)?;
        writer.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.lock_writer().flush()
    }
}
