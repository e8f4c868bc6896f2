//! Common error types used across the dashboard crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all dashboard operations
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DashboardError {
    // Metric-source errors
    #[error("Metric fetch failed: {message}")]
    Fetch { message: String },

    #[error("Endpoint reported failure: {message}")]
    Endpoint { message: String },

    #[error("Malformed payload: {message}")]
    Decode { message: String },

    // Local validation errors
    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // Preference-store errors
    #[error("Preference store unavailable: {message}")]
    Storage { message: String },

    // Server-side errors
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    #[error("Save failed: {message}")]
    Save { message: String },
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::Fetch {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Metric fetch failed: connection refused");
    }

    #[test]
    fn test_error_serialization() {
        let err = DashboardError::InvalidFilter {
            message: "start after end".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("InvalidFilter"));
        assert!(json.contains("start after end"));
    }

    #[test]
    fn test_json_error_conversion() {
        let bad: Result<u32, _> = serde_json::from_str("not json");
        let err: DashboardError = bad.unwrap_err().into();
        assert!(matches!(err, DashboardError::Decode { .. }));
    }
}
