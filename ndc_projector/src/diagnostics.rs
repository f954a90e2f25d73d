/// Diagnostics - process-wide logger slot
///
/// Every operation in this crate is a pure function of its inputs; the only
/// shared state is where log entries go. The slot is a thread-safe static
/// initialized lazily with `DefaultLogger`.

use std::sync::{OnceLock, RwLock};
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Entries below this severity are dropped before reaching the logger
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Trace as u8);

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Logging entry points used by the `ndc_*!` macros
///
/// # Example
///
/// ```no_run
/// use ndc_projector::ndc::Diagnostics;
/// use ndc_projector::ndc::log::{Logger, LogEntry, LogSeverity};
///
/// struct HostConsole;
/// impl Logger for HostConsole {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host...
///     }
/// }
///
/// Diagnostics::set_logger(HostConsole);
/// Diagnostics::set_min_severity(LogSeverity::Info);
/// ```
pub struct Diagnostics;

impl Diagnostics {
    /// Replace the active logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop entries below `severity`. Defaults to `Trace` (everything passes).
    pub fn set_min_severity(severity: LogSeverity) {
        MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
    }

    /// Current severity threshold
    pub fn min_severity() -> LogSeverity {
        LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
    }

    /// Log without file:line (used by ndc_trace!..ndc_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }

    /// Log with file:line (used by ndc_error!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }

    fn dispatch(entry: LogEntry) {
        if entry.severity < Self::min_severity() {
            return;
        }
        if let Ok(lock) = logger_slot().read() {
            lock.log(&entry);
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
