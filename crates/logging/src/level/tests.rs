use super::LogLevel;
use crate::error::ParseLogLevelError;

#[test]
fn levels_are_ordered_by_permissiveness() {
    assert!(LogLevel::Off < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Debug);

    let mut sorted = LogLevel::ALL;
    sorted.reverse();
    sorted.sort();
    assert_eq!(sorted, LogLevel::ALL);
}

#[test]
fn off_threshold_allows_nothing() {
    for level in LogLevel::ALL {
        assert!(!LogLevel::Off.allows(level), "{level} passed off");
    }
}

#[test]
fn debug_threshold_allows_every_message_level() {
    for level in LogLevel::MESSAGE_LEVELS {
        assert!(LogLevel::Debug.allows(level), "{level} rejected by debug");
    }
}

#[test]
fn off_is_never_a_message_level() {
    for threshold in LogLevel::ALL {
        assert!(!threshold.allows(LogLevel::Off));
    }
}

#[test]
fn threshold_grid_matches_ordering() {
    let expected = [
        (LogLevel::Error, [true, false, false, false]),
        (LogLevel::Warn, [true, true, false, false]),
        (LogLevel::Info, [true, true, true, false]),
        (LogLevel::Debug, [true, true, true, true]),
    ];

    for (threshold, row) in expected {
        for (level, allowed) in LogLevel::MESSAGE_LEVELS.into_iter().zip(row) {
            assert_eq!(
                threshold.allows(level),
                allowed,
                "threshold {threshold} level {level}"
            );
        }
    }
}

#[test]
fn labels_are_upper_case_words() {
    let labels: Vec<_> = LogLevel::MESSAGE_LEVELS
        .into_iter()
        .map(LogLevel::label)
        .collect();
    assert_eq!(labels, ["ERROR", "WARN", "INFO", "DEBUG"]);
}

#[test]
fn display_matches_parse_input() {
    for level in LogLevel::ALL {
        let parsed: LogLevel = level.to_string().parse().expect("round trip");
        assert_eq!(parsed, level);
    }
}

#[test]
fn parse_accepts_aliases_and_case() {
    assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert_eq!(" Info ".parse::<LogLevel>(), Ok(LogLevel::Info));
    assert_eq!("none".parse::<LogLevel>(), Ok(LogLevel::Off));
}

#[test]
fn parse_rejects_empty_input() {
    assert_eq!("   ".parse::<LogLevel>(), Err(ParseLogLevelError::Empty));
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!(
        "trace".parse::<LogLevel>(),
        Err(ParseLogLevelError::Unknown("trace".to_owned()))
    );
}

#[test]
fn verbosity_saturates_at_debug() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Off);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Warn);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Debug);
}

#[test]
fn default_is_off() {
    assert_eq!(LogLevel::default(), LogLevel::Off);
}
