//! Unit tests for diagnostics.rs
//!
//! LOGGER is a global OnceLock shared across all tests: every test that swaps
//! the logger is #[serial] and only inspects entries from its own source.

use crate::ndc::Diagnostics;
use crate::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

const SOURCE: &str = "ndc::DiagnosticsTest";

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Diagnostics::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == SOURCE {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

fn teardown() {
    Diagnostics::set_min_severity(LogSeverity::Trace);
    Diagnostics::reset_logger();
}

// ============================================================================
// ROUTING TESTS
// ============================================================================

#[test]
#[serial]
fn test_log_routes_to_custom_logger() {
    let entries = install_capture();

    crate::ndc_info!(SOURCE, "window {}", 1);
    crate::ndc_warn!(SOURCE, "skipped {}", "prim");

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].severity, LogSeverity::Info);
        assert_eq!(entries[0].message, "window 1");
        assert!(entries[0].file.is_none());
        assert_eq!(entries[1].severity, LogSeverity::Warn);
    }

    teardown();
}

#[test]
#[serial]
fn test_error_macro_records_location() {
    let entries = install_capture();

    crate::ndc_error!(SOURCE, "camera missing");

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].file.unwrap().ends_with("diagnostics_tests.rs"));
        assert!(entries[0].line.is_some());
    }

    teardown();
}

#[test]
#[serial]
fn test_ndc_err_logs_before_returning() {
    let entries = install_capture();

    let err = crate::ndc_err!(SOURCE, InvalidInput, "{} normals for {} points", 3, 4);

    assert_eq!(err, crate::ndc::Error::InvalidInput("3 normals for 4 points".to_string()));
    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].severity, LogSeverity::Error);
        assert_eq!(entries[0].message, "3 normals for 4 points");
    }

    teardown();
}

// ============================================================================
// SEVERITY FILTER TESTS
// ============================================================================

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let entries = install_capture();
    Diagnostics::set_min_severity(LogSeverity::Warn);
    assert_eq!(Diagnostics::min_severity(), LogSeverity::Warn);

    crate::ndc_trace!(SOURCE, "dropped");
    crate::ndc_debug!(SOURCE, "dropped");
    crate::ndc_info!(SOURCE, "dropped");
    crate::ndc_warn!(SOURCE, "kept");
    crate::ndc_error!(SOURCE, "kept");

    {
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.message == "kept"));
    }

    teardown();
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let entries = install_capture();
    Diagnostics::reset_logger();

    crate::ndc_info!(SOURCE, "goes to the default logger");

    assert!(entries.lock().unwrap().is_empty());
    teardown();
}
