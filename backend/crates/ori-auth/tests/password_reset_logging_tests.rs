//! Runs in its own test binary because it installs the global logger

mod common;

use common::create_test_harness;

use ori_auth::PASSWORD_RESET_PLACEHOLDER;

use std::sync::{Mutex, PoisonError};

use googletest::prelude::*;
use log::{LevelFilter, Log, Metadata, Record};

static CAPTURED: Mutex<Vec<String>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.args().to_string());
    }

    fn flush(&self) {}
}

#[tokio::test]
async fn given_password_reset_request_then_email_never_reaches_the_log() {
    // Given: Every record at every level is captured
    log::set_logger(&CapturingLogger).unwrap();
    log::set_max_level(LevelFilter::Trace);
    let harness = create_test_harness();

    // When
    let message = harness.gateway.request_password_reset("ada@example.com");

    // Then
    let captured = CAPTURED.lock().unwrap().clone();
    assert_that!(message, eq(PASSWORD_RESET_PLACEHOLDER));
    assert_that!(captured, contains(contains_substring("Password reset requested")));
    assert_that!(captured, each(not(contains_substring("ada@example.com"))));
}
