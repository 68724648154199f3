//! Unit tests for logging setup

use signalscope::logging::{init_logging_for, is_production};

#[test]
fn test_production_detection() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("development"));
    assert!(!is_production("sandbox"));
}

#[test]
fn test_repeated_initialization_does_not_panic() {
    init_logging_for("development");
    assert!(!init_logging_for("development"));
}
