#![deny(unsafe_code)]

//! Shared test doubles for the ctrlkit workspace.
//!
//! - [`CaptureFile`] is a temporary file wrapped in a
//!   [`SharedSink`] that tests hand to a logger and read back afterwards.
//! - [`FailingWriter`] rejects every write and counts the attempts.
//! - [`MockMotor`] records the last voltage it was commanded with.
//! - [`EnvGuard`] serializes environment mutations and restores them on drop.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use device::{Motor, OutputSlot};
use logging_sink::SharedSink;

/// Anonymous temporary file shared between a test and the logger under test.
///
/// The file disappears when the last handle is dropped.
#[derive(Clone, Debug)]
pub struct CaptureFile {
    sink: SharedSink<File>,
}

impl CaptureFile {
    /// Creates an empty capture file.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            sink: SharedSink::new(tempfile::tempfile()?),
        })
    }

    /// Returns a sink handle writing into the file.
    #[must_use]
    pub fn sink(&self) -> SharedSink<File> {
        self.sink.clone()
    }

    /// Rewinds the file and reads everything written so far.
    ///
    /// The write position is restored to the end afterwards, so later lines
    /// keep appending.
    pub fn contents(&self) -> io::Result<String> {
        self.sink.with_writer(|file| {
            file.flush()?;
            file.seek(SeekFrom::Start(0))?;
            let mut text = String::new();
            let read = file.read_to_string(&mut text);
            file.seek(SeekFrom::End(0))?;
            read.map(|_| text)
        })
    }

    /// Returns the lines written so far, without their terminators.
    pub fn lines(&self) -> io::Result<Vec<String>> {
        Ok(self.contents()?.lines().map(str::to_owned).collect())
    }
}

/// Writer whose every operation fails with [`io::ErrorKind::BrokenPipe`].
#[derive(Clone, Debug, Default)]
pub struct FailingWriter {
    attempts: Arc<AtomicUsize>,
}

impl FailingWriter {
    /// Creates a failing writer with a zero attempt count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many writes were attempted across all clones.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "capture closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "capture closed"))
    }
}

/// Motor double remembering the last commanded voltage.
#[derive(Debug, Default)]
pub struct MockMotor {
    last_voltage: AtomicI32,
    commands: AtomicUsize,
    output: OutputSlot,
}

impl MockMotor {
    /// Creates a motor that has not been commanded yet.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns the last commanded voltage in millivolts, or zero.
    #[must_use]
    pub fn last_voltage(&self) -> i32 {
        self.last_voltage.load(Ordering::SeqCst)
    }

    /// Returns how many voltage commands the motor received.
    #[must_use]
    pub fn commands(&self) -> usize {
        self.commands.load(Ordering::SeqCst)
    }
}

impl Motor for MockMotor {
    fn move_voltage(&self, millivolts: i32) {
        self.last_voltage.store(millivolts, Ordering::SeqCst);
        self.commands.fetch_add(1, Ordering::SeqCst);
    }

    fn output_slot(&self) -> &OutputSlot {
        &self.output
    }
}

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Scoped environment guard for test-only mutations.
///
/// Holding the guard serializes environment changes across the test binary.
/// Every touched variable gets its previous value back when the guard drops.
pub struct EnvGuard {
    entries: Vec<(&'static str, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Acquires the environment lock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            _lock: env_lock()
                .lock()
                .unwrap_or_else(|poison| poison.into_inner()),
        }
    }

    fn remember(&mut self, key: &'static str) {
        if self.entries.iter().all(|(existing, _)| existing != &key) {
            self.entries.push((key, env::var_os(key)));
        }
    }

    /// Sets an environment variable, recording its previous value.
    #[allow(unsafe_code)]
    pub fn set(&mut self, key: &'static str, value: impl AsRef<OsStr>) {
        self.remember(key);
        // SAFETY: mutations are serialized by the environment lock.
        unsafe {
            env::set_var(key, value);
        }
    }

    /// Removes an environment variable, recording its previous value.
    #[allow(unsafe_code)]
    pub fn remove(&mut self, key: &'static str) {
        self.remember(key);
        // SAFETY: mutations are serialized by the environment lock.
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EnvGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        for (key, previous) in self.entries.drain(..).rev() {
            // SAFETY: the environment lock is still held.
            unsafe {
                match previous {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
