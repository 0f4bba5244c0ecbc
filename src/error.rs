//! Unified application error types
//!
//! Provides a single error type for the crate, suitable for crossing the
//! host application's serialization boundary.

use serde::Serialize;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Date input that cannot be interpreted
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Unrecognized event kind string
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),
}

/// Serializable error response for the host boundary
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let (code, message) = match err {
            AppError::InvalidDate(_) => ("INVALID_DATE".to_string(), err.to_string()),
            AppError::UnknownEventKind(_) => ("UNKNOWN_EVENT_KIND".to_string(), err.to_string()),
        };
        Self { code, message }
    }
}

// Implement Serialize for AppError so results holding it can cross the
// host boundary directly
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

impl AppError {
    /// Create an invalid-date error
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate(input.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::invalid_date("2024-13-40");
        assert_eq!(err.to_string(), "invalid date: 2024-13-40");
    }

    #[test]
    fn test_error_serialization() {
        let err = AppError::invalid_date("not-a-date");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("INVALID_DATE"));
        assert!(json.contains("not-a-date"));
    }

    #[test]
    fn test_unknown_kind_serialization() {
        let err = AppError::UnknownEventKind("wet".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("UNKNOWN_EVENT_KIND"));
        assert!(json.contains("wet"));
    }
}
