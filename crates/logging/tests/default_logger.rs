//! Integration tests for the process-wide default logger.
//!
//! The default logger is global state, so every scenario lives in one test to
//! keep the ordering deterministic.

use std::sync::Arc;

use logging::{
    ConstantClock, FixedThreadName, LogLevel, Logger, default_logger, set_default_logger,
};
use logging_sink::SharedSink;

/// Verifies the default starts disabled and can be replaced and restored.
#[test]
fn default_logger_lifecycle() {
    let initial = default_logger();
    assert_eq!(initial.threshold(), LogLevel::Off);
    initial.error(|| -> &'static str { panic!("disabled logger evaluated a message") });

    let sink = SharedSink::new(Vec::new());
    let installed = Arc::new(Logger::with_thread_identity(
        ConstantClock::from_millis(1),
        FixedThreadName::new("T"),
        sink.clone(),
        LogLevel::Info,
    ));

    let previous = set_default_logger(Arc::clone(&installed));
    assert!(Arc::ptr_eq(&previous, &initial));

    default_logger().info("through default");
    assert!(Arc::ptr_eq(&default_logger(), &installed));

    let replaced = set_default_logger(Arc::new(Logger::disabled()));
    assert!(Arc::ptr_eq(&replaced, &installed));
    replaced.close();

    default_logger().error("discarded");
    assert_eq!(sink.lock().as_slice(), b"1 (T) INFO: through default\n");
}
