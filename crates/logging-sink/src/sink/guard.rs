use std::ops::{Deref, DerefMut};
use std::sync::MutexGuard;

/// RAII guard granting exclusive access to the writer behind a
/// [`SharedSink`](crate::SharedSink).
///
/// Instances are created by [`SharedSink::lock`](crate::SharedSink::lock).
/// The guard implements [`Deref`] and [`DerefMut`] so callers can use the
/// writer directly, for example to rewind a file before reading back the
/// lines a logger produced. Dropping the guard releases the lock.
#[must_use = "dropping the guard immediately releases the sink"]
pub struct SinkGuard<'a, W> {
    writer: MutexGuard<'a, W>,
}

impl<'a, W> SinkGuard<'a, W> {
    pub(crate) const fn new(writer: MutexGuard<'a, W>) -> Self {
        Self { writer }
    }
}

impl<W> Deref for SinkGuard<'_, W> {
    type Target = W;

    fn deref(&self) -> &Self::Target {
        &self.writer
    }
}

impl<W> DerefMut for SinkGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.writer
    }
}
