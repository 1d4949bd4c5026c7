//! Serializable error shape for JSON output.

use breachscope_lookup::{CheckError, LookupError};
use serde::Serialize;

/// Error reported to the user, with a stable code for scripts.
#[derive(Debug, Serialize)]
pub struct CommandError {
    /// Error code for machine handling (e.g., "TIMEOUT")
    pub code: String,
    /// User-friendly error message
    pub message: String,
    /// Optional context (never contains the checked address)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CommandError {
    /// Create a new command error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create a command error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl From<&LookupError> for CommandError {
    fn from(err: &LookupError) -> Self {
        let message = err.user_message();
        match err {
            LookupError::Connection(_) => Self::new("CONNECTION_FAILED", message),
            LookupError::Timeout { seconds } => Self::with_details(
                "TIMEOUT",
                message,
                serde_json::json!({ "timeout_secs": seconds }),
            ),
            LookupError::UnexpectedStatus { status } => Self::with_details(
                "UNEXPECTED_STATUS",
                message,
                serde_json::json!({ "status": status }),
            ),
            LookupError::Network(_) => Self::new("NETWORK_ERROR", message),
            LookupError::InvalidBody(_) => Self::new("INVALID_RESPONSE", message),
            LookupError::Internal(_) => Self::new("INTERNAL_ERROR", message),
        }
    }
}

impl From<&CheckError> for CommandError {
    fn from(err: &CheckError) -> Self {
        match err {
            CheckError::InvalidEmail(_) => Self::new("INVALID_EMAIL", err.user_message()),
            CheckError::Lookup(lookup) => lookup.into(),
        }
    }
}
