//! crates/logging/src/default_logger.rs
//! Process-wide logger slot for code that has no logger handed to it.

use std::sync::{Arc, OnceLock, RwLock};

use crate::logger::Logger;

static DEFAULT_LOGGER: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    DEFAULT_LOGGER.get_or_init(|| RwLock::new(Arc::new(Logger::disabled())))
}

/// Returns the process-wide logger.
///
/// Until [`set_default_logger`] is called this is a
/// [`disabled`](Logger::disabled) logger that discards everything.
#[must_use]
pub fn default_logger() -> Arc<Logger> {
    let guard = slot().read().unwrap_or_else(|poison| poison.into_inner());
    Arc::clone(&guard)
}

/// Installs `logger` as the process-wide logger and returns the previous one.
///
/// Handles obtained earlier from [`default_logger`] keep pointing at the old
/// logger. Close the returned logger when nothing else should write to it.
pub fn set_default_logger(logger: Arc<Logger>) -> Arc<Logger> {
    let mut guard = slot().write().unwrap_or_else(|poison| poison.into_inner());
    std::mem::replace(&mut *guard, logger)
}
