//! Error handling for texcal
//!
//! This module provides a unified error type and result type for grid
//! construction, document assembly and holiday resolution.

use std::fmt;

/// Calendar error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Year or month range outside valid calendar bounds
    InvalidRange { message: String },
    /// Unknown layout mode, or grids that do not fit the layout
    Configuration { message: String },
    /// Holiday source unreadable or malformed
    HolidaySource { message: String },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidRange { message } => {
                write!(f, "Invalid range: {}", message)
            }
            CalendarError::Configuration { message } => {
                write!(f, "Configuration error: {}", message)
            }
            CalendarError::HolidaySource { message } => {
                write!(f, "Holiday source error: {}", message)
            }
            CalendarError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for CalendarError {}

impl From<std::io::Error> for CalendarError {
    fn from(err: std::io::Error) -> Self {
        CalendarError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(err: serde_json::Error) -> Self {
        CalendarError::HolidaySource {
            message: err.to_string(),
        }
    }
}

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;

// Convenience constructors for errors
impl CalendarError {
    pub fn invalid_range(message: impl Into<String>) -> Self {
        CalendarError::InvalidRange {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CalendarError::Configuration {
            message: message.into(),
        }
    }

    pub fn holiday_source(message: impl Into<String>) -> Self {
        CalendarError::HolidaySource {
            message: message.into(),
        }
    }

    /// Whether this error was raised by a holiday collaborator rather than the core
    pub fn is_holiday_source(&self) -> bool {
        matches!(self, CalendarError::HolidaySource { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_display() {
        let err = CalendarError::invalid_range("month 13 is not in 1..=12");
        let msg = err.to_string();
        assert!(msg.contains("Invalid range"));
        assert!(msg.contains("month 13"));
    }

    #[test]
    fn test_configuration_display() {
        let err = CalendarError::configuration("unknown layout mode 'a5-quarter'");
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("a5-quarter"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: CalendarError = io.into();
        assert!(matches!(err, CalendarError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_json_conversion_is_holiday_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CalendarError = json_err.into();
        assert!(err.is_holiday_source());
    }
}
