//! Error types for the NDC projector
//!
//! Two real failure kinds exist: a degenerate or missing configuration
//! (camera, render target, padding) and malformed per-point input arrays.
//! "Nothing visible" is NOT an error and is modelled as `Ok(None)`.

use std::fmt;

/// Result type for projector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Projector errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A required input (camera, resolution, aperture, focal length) is missing or degenerate
    ConfigurationError(String),

    /// A ratio with a zero (or non-finite) denominator was requested
    DivisionError(String),

    /// Per-point input arrays are inconsistent (length mismatch, index out of range)
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            Error::DivisionError(msg) => write!(f, "Division error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity (with file:line) and evaluate to it.
///
/// # Example
///
/// ```ignore
/// return Err(ndc_err!("ndc::Projector", ConfigurationError, "Render height is zero"));
/// ```
#[macro_export]
macro_rules! ndc_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::ndc_error!($source, "{}", message);
        $crate::ndc::Error::$variant(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
