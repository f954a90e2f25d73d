//! Internal logging system for the NDC projector
//!
//! This module provides a small logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for detailed ERROR logs
//!
//! The active logger lives in [`Diagnostics`](crate::ndc::Diagnostics).

use colored::*;
use std::fmt::Display;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Hosts usually forward entries into their own console or message log.
///
/// # Example
///
/// ```no_run
/// use ndc_projector::ndc::log::{Logger, LogEntry};
///
/// struct HostConsole;
///
/// impl Logger for HostConsole {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source (e.g., "ndc::Projector", "ndc::PhotonMap")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-point detail
    Trace,

    /// Intermediate values (effective aperture, counts)
    Debug,

    /// Results written back to the host
    Info,

    /// Skipped inputs
    Warn,

    /// Configuration failures (with file:line details)
    Error,
}

impl LogSeverity {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LogSeverity::Trace,
            1 => LogSeverity::Debug,
            2 => LogSeverity::Info,
            3 => LogSeverity::Warn,
            _ => LogSeverity::Error,
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry as a single line, without colors.
    pub fn format_plain(entry: &LogEntry) -> String {
        Self::format_line(entry, Self::severity_label(entry.severity), &entry.source)
    }

    /// Same line as [`format_plain`](Self::format_plain), with the severity
    /// and source colored for the console.
    pub fn format_colored(entry: &LogEntry) -> String {
        let label = Self::severity_label(entry.severity);
        let severity = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        Self::format_line(entry, severity, entry.source.bright_blue())
    }

    fn severity_label(severity: LogSeverity) -> &'static str {
        match severity {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    fn format_line(entry: &LogEntry, severity: impl Display, source: impl Display) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity, source, entry.message, file, line
            ),
            _ => format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        eprintln!("{}", Self::format_colored(entry));
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! ndc_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::ndc::Diagnostics::log(
            $crate::ndc::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! ndc_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::ndc::Diagnostics::log(
            $crate::ndc::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// # Example
///
/// ```ignore
/// ndc_info!("ndc::Projector", "dataWindowNDC = {:?}", window);
/// ```
#[macro_export]
macro_rules! ndc_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::ndc::Diagnostics::log(
            $crate::ndc::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! ndc_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::ndc::Diagnostics::log(
            $crate::ndc::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! ndc_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::ndc::Diagnostics::log_detailed(
            $crate::ndc::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
