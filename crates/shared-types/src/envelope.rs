//! Success/failure wrapper shape returned by every data endpoint

use crate::errors::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

/// Response envelope for every metric endpoint.
///
/// Some deployments of the API emit `ok` instead of `success`; both
/// deserialize into the same field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(alias = "ok")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Success envelope carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Success envelope carrying only a confirmation message (write endpoints).
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    /// Failure envelope carrying an error description.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Unwrap the payload. A failure envelope and a success envelope with a
    /// missing payload are both treated as errors, so callers can fall back
    /// to their empty state with one `match`.
    pub fn into_data(self) -> DashboardResult<T> {
        if !self.success {
            return Err(DashboardError::Endpoint {
                message: self.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        self.data.ok_or_else(|| DashboardError::Decode {
            message: "success envelope without data".to_string(),
        })
    }

    /// Confirmation check for write endpoints that return no payload.
    pub fn confirm(self) -> DashboardResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(DashboardError::Save {
                message: self.error.unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}
