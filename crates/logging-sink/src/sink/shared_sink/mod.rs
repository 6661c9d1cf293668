use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use super::guard::SinkGuard;

/// Clonable handle to a caller-owned [`std::io::Write`] destination.
///
/// Every clone refers to the same writer. The logger receives one clone and
/// writes lines through it via [`LineSink`](crate::LineSink); the caller keeps
/// another and can [`lock`](Self::lock) the writer to inspect or rewind it.
/// Releasing the logger's clone never closes the writer; it is dropped only
/// when the last handle goes away, or recovered with
/// [`try_into_inner`](Self::try_into_inner).
///
/// # Examples
///
/// ```
/// use logging_sink::{LineSink, SharedSink};
///
/// let sink = SharedSink::new(Vec::new());
/// let logger_side = sink.clone();
/// assert_eq!(sink.handle_count(), 2);
///
/// logger_side.write_line(b"first\n")?;
/// drop(logger_side);
///
/// let buffer = sink.try_into_inner().expect("last handle");
/// assert_eq!(buffer, b"first\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct SharedSink<W> {
    inner: Arc<Mutex<W>>,
}

mod writing;

impl<W> SharedSink<W> {
    /// Wraps `writer` in a new shared handle.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }

    /// Locks the writer for exclusive access.
    ///
    /// While the returned guard is alive, lines submitted through other
    /// handles wait for it to be dropped.
    pub fn lock(&self) -> SinkGuard<'_, W> {
        SinkGuard::new(self.lock_writer())
    }

    /// Runs `op` with exclusive access to the writer.
    pub fn with_writer<R>(&self, op: impl FnOnce(&mut W) -> R) -> R {
        let mut guard = self.lock_writer();
        op(&mut guard)
    }

    /// Returns the number of live handles referring to this writer.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Reports whether `self` and `other` refer to the same writer.
    #[must_use]
    pub fn same_writer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Recovers the writer when `self` is the last live handle.
    ///
    /// Returns the handle unchanged when other clones are still alive.
    pub fn try_into_inner(self) -> Result<W, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(|poison| poison.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }

    pub(super) fn lock_writer(&self) -> MutexGuard<'_, W> {
        self.inner
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl<W> Clone for SharedSink<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W> fmt::Debug for SharedSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSink")
            .field("handles", &self.handle_count())
            .finish_non_exhaustive()
    }
}
