//! Unit tests for the logging functionality in the `vedirect-rs` crate.

use vedirect_rs::logging::{
    init_logger, init_logger_with_filter, log_debug, log_error, log_info, log_warn,
};

/// Tests that the logging helpers do not panic, initialized or not.
#[test]
fn test_logging() {
    log_error("This is an error message");
    log_warn("This is a warning message");
    log_info("This is an info message");
    log_debug("This is a debug message");
}

/// Tests that repeated initialization is harmless.
#[test]
fn test_init_logger() {
    init_logger();
    init_logger_with_filter("vedirect_rs=trace");
    init_logger();
}
