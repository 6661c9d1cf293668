//! Message payloads accepted by the logging entry points.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// A log message: either ready-made text or a computation producing it.
///
/// Literal text (`&str`, `String`, `Cow<str>`, [`fmt::Arguments`]) is copied
/// into the line buffer as-is. A closure returning any [`fmt::Display`] value
/// is a deferred message: the [`Logger`](crate::Logger) decides whether the
/// line is emitted first and only then invokes the closure, exactly once.
/// A filtered closure is dropped without being called.
///
/// # Examples
///
/// ```
/// use logging::MessageSource;
///
/// let mut line = String::new();
/// "ready".write_into(&mut line);
/// (|| 40 + 2).write_into(&mut line);
/// assert_eq!(line, "ready42");
/// ```
pub trait MessageSource {
    /// Appends the message text to `buffer`, evaluating it if deferred.
    fn write_into(self, buffer: &mut String);
}

impl MessageSource for &str {
    fn write_into(self, buffer: &mut String) {
        buffer.push_str(self);
    }
}

impl MessageSource for String {
    fn write_into(self, buffer: &mut String) {
        buffer.push_str(&self);
    }
}

impl MessageSource for &String {
    fn write_into(self, buffer: &mut String) {
        buffer.push_str(self);
    }
}

impl MessageSource for Cow<'_, str> {
    fn write_into(self, buffer: &mut String) {
        buffer.push_str(&self);
    }
}

impl MessageSource for fmt::Arguments<'_> {
    fn write_into(self, buffer: &mut String) {
        // A Display impl that reports an error leaves whatever it wrote so far.
        let _ = buffer.write_fmt(self);
    }
}

impl<F, T> MessageSource for F
where
    F: FnOnce() -> T,
    T: fmt::Display,
{
    fn write_into(self, buffer: &mut String) {
        let message = self();
        let _ = write!(buffer, "{message}");
    }
}
