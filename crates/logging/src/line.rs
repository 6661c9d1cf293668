//! Rendering of a single log line.
//!
//! Every emitted message becomes exactly one line of the form
//! `"<elapsed> (<thread>) <LEVEL>: <message>\n"`, where `<elapsed>` is the
//! clock value in whole milliseconds.

use std::fmt::Write as _;
use std::time::Duration;

use crate::level::LogLevel;
use crate::message::MessageSource;

/// Renders one complete line into `buffer`, replacing its previous contents.
///
/// `message` is evaluated here, after the header has been written, so a
/// deferred message runs only once the caller has committed to emitting.
pub(crate) fn render_line<M>(
    buffer: &mut String,
    elapsed: Duration,
    thread: &str,
    level: LogLevel,
    message: M,
) where
    M: MessageSource,
{
    buffer.clear();
    let _ = write!(
        buffer,
        "{} ({}) {}: ",
        elapsed.as_millis(),
        thread,
        level.label()
    );
    message.write_into(buffer);
    buffer.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(elapsed: Duration, thread: &str, level: LogLevel, message: &str) -> String {
        let mut buffer = String::new();
        render_line(&mut buffer, elapsed, thread, level, message);
        buffer
    }

    #[test]
    fn renders_exact_shape() {
        assert_eq!(
            line(Duration::ZERO, "T", LogLevel::Error, "MSG"),
            "0 (T) ERROR: MSG\n"
        );
    }

    #[test]
    fn elapsed_is_whole_milliseconds() {
        let elapsed = Duration::from_micros(12_345_678);
        assert_eq!(
            line(elapsed, "main", LogLevel::Info, "tick"),
            "12345 (main) INFO: tick\n"
        );
    }

    #[test]
    fn every_level_uses_its_label() {
        for (level, word) in [
            (LogLevel::Error, "ERROR"),
            (LogLevel::Warn, "WARN"),
            (LogLevel::Info, "INFO"),
            (LogLevel::Debug, "DEBUG"),
        ] {
            assert_eq!(
                line(Duration::ZERO, "T", level, "MSG"),
                format!("0 (T) {word}: MSG\n")
            );
        }
    }

    #[test]
    fn empty_message_keeps_separator() {
        assert_eq!(line(Duration::ZERO, "T", LogLevel::Debug, ""), "0 (T) DEBUG: \n");
    }

    #[test]
    fn buffer_is_reused_without_leftovers() {
        let mut buffer = String::from("stale contents");
        render_line(&mut buffer, Duration::from_millis(1), "T", LogLevel::Warn, "fresh");
        assert_eq!(buffer, "1 (T) WARN: fresh\n");
    }
}
