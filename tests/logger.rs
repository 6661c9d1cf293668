//! End-to-end logger scenarios against a file opened by the caller.
//!
//! Each scenario logs one message per level, rewinds the file and reads the
//! lines back, tagging them with the real name of the test thread.

use ctrlkit::logging::{ConstantClock, CurrentThread, LogLevel, Logger, ThreadIdentity};
use test_support::CaptureFile;

struct Scenario {
    capture: CaptureFile,
    logger: Logger,
}

impl Scenario {
    fn new(threshold: LogLevel) -> Self {
        let capture = CaptureFile::new().expect("create capture file");
        let logger = Logger::new(ConstantClock::from_millis(0), capture.sink(), threshold);
        Self { capture, logger }
    }

    fn log_data(&self) {
        self.logger.error("MSG");
        self.logger.warn("MSG");
        self.logger.info("MSG");
        self.logger.debug("MSG");
    }

    fn read_back(&self) -> String {
        self.capture.contents().expect("read capture file")
    }
}

impl Drop for Scenario {
    fn drop(&mut self) {
        self.logger.close();
    }
}

fn expected(labels: &[&str]) -> String {
    let thread = CurrentThread.current_name();
    labels
        .iter()
        .map(|label| format!("0 ({thread}) {label}: MSG\n"))
        .collect()
}

// ============================================================================
// Threshold Scenarios
// ============================================================================

/// Verifies the off level writes nothing at all.
#[test]
fn off_level() {
    let scenario = Scenario::new(LogLevel::Off);
    scenario.log_data();
    assert_eq!(scenario.read_back(), "");
}

/// Verifies the error level writes only the error line.
#[test]
fn error_level() {
    let scenario = Scenario::new(LogLevel::Error);
    scenario.log_data();
    assert_eq!(scenario.read_back(), expected(&["ERROR"]));
}

/// Verifies the warn level adds the warning line.
#[test]
fn warning_level() {
    let scenario = Scenario::new(LogLevel::Warn);
    scenario.log_data();
    assert_eq!(scenario.read_back(), expected(&["ERROR", "WARN"]));
}

/// Verifies the info level adds the info line.
#[test]
fn info_level() {
    let scenario = Scenario::new(LogLevel::Info);
    scenario.log_data();
    assert_eq!(scenario.read_back(), expected(&["ERROR", "WARN", "INFO"]));
}

/// Verifies the debug level writes all four lines in order.
#[test]
fn debug_level() {
    let scenario = Scenario::new(LogLevel::Debug);
    scenario.log_data();
    assert_eq!(
        scenario.read_back(),
        expected(&["ERROR", "WARN", "INFO", "DEBUG"])
    );
}

// ============================================================================
// Lazy Messages And Lifecycle
// ============================================================================

/// Verifies a debug thunk is not evaluated under the info level.
#[test]
fn lazy_logging() {
    let scenario = Scenario::new(LogLevel::Info);
    let mut evaluated = 0;
    scenario.logger.debug(|| {
        evaluated += 1;
        String::new()
    });
    assert_eq!(evaluated, 0);
    assert_eq!(scenario.read_back(), "");
}

/// Verifies closing twice, then logging, leaves the file unchanged.
#[test]
fn close_is_idempotent_and_final() {
    let scenario = Scenario::new(LogLevel::Debug);
    scenario.logger.error("MSG");
    scenario.logger.close();
    scenario.logger.close();
    scenario.log_data();
    assert_eq!(scenario.read_back(), expected(&["ERROR"]));
}
