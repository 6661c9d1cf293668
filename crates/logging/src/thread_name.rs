//! crates/logging/src/thread_name.rs
//! Naming of the thread that emits a log line.

use std::borrow::Cow;
use std::sync::Arc;
use std::thread;

/// Supplies a human-readable name for the calling thread.
///
/// The logger asks for the name once per emitted line, from the thread that
/// issued the log call.
pub trait ThreadIdentity: Send + Sync {
    /// Returns the name of the calling thread.
    fn current_name(&self) -> Cow<'_, str>;
}

impl<T> ThreadIdentity for Arc<T>
where
    T: ThreadIdentity + ?Sized,
{
    fn current_name(&self) -> Cow<'_, str> {
        (**self).current_name()
    }
}

impl<T> ThreadIdentity for Box<T>
where
    T: ThreadIdentity + ?Sized,
{
    fn current_name(&self) -> Cow<'_, str> {
        (**self).current_name()
    }
}

/// Names threads after [`std::thread::Thread::name`].
///
/// Unnamed threads are reported as `thread-<id>` using the numeric part of
/// their [`std::thread::ThreadId`], which stays stable for the thread's
/// lifetime.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentThread;

impl ThreadIdentity for CurrentThread {
    fn current_name(&self) -> Cow<'_, str> {
        let current = thread::current();
        match current.name() {
            Some(name) => Cow::Owned(name.to_owned()),
            None => Cow::Owned(unnamed_thread_label(&current)),
        }
    }
}

fn unnamed_thread_label(thread: &thread::Thread) -> String {
    // ThreadId's Debug output is `ThreadId(N)`.
    let id = format!("{:?}", thread.id());
    let digits: String = id.chars().filter(char::is_ascii_digit).collect();
    format!("thread-{digits}")
}

/// Reports the same name for every thread.
///
/// Used to produce reproducible lines in tests.
///
/// # Examples
///
/// ```
/// use logging::{FixedThreadName, ThreadIdentity};
///
/// let names = FixedThreadName::new("T");
/// assert_eq!(names.current_name(), "T");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedThreadName {
    name: Cow<'static, str>,
}

impl FixedThreadName {
    /// Creates an identity that always reports `name`.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }
}

impl ThreadIdentity for FixedThreadName {
    fn current_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name.as_ref())
    }
}
