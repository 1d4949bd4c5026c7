//! Error types for breach lookups.

use breachscope_core::BreachscopeError;
use thiserror::Error;

/// Errors that can occur while querying the lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service could not be reached
    #[error("connection failed: {0}")]
    Connection(String),

    /// Timeout error
    #[error("request timed out after {seconds}s")]
    Timeout {
        /// Timeout duration in seconds
        seconds: u64,
    },

    /// Status other than 200 or 404
    #[error("unexpected status {status} from lookup service")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// A 200 response whose body is not JSON
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl LookupError {
    /// Sort a transport failure into connection, timeout or generic network errors.
    ///
    /// A timeout while connecting counts as a connection failure.
    #[must_use]
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        match TransportFailure::classify(err.is_connect(), err.is_timeout()) {
            TransportFailure::Connect => Self::Connection(err.to_string()),
            TransportFailure::Timeout => Self::Timeout {
                seconds: timeout_secs,
            },
            TransportFailure::Other => Self::Network(err),
        }
    }

    /// Message shown to the person running the check.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection(_) => {
                "No internet connection!\nPlease check your network and try again.".to_string()
            }
            Self::Timeout { .. } => {
                "Request timed out!\nThe server took too long to respond.".to_string()
            }
            Self::UnexpectedStatus { status } => {
                format!("Unexpected response from server (Status: {status})")
            }
            Self::Network(err) => format!("Network error occurred:\n{err}"),
            Self::InvalidBody(detail) | Self::Internal(detail) => {
                format!("An unexpected error occurred:\n{detail}")
            }
        }
    }
}

/// Errors returned by [`BreachChecker::check`](crate::BreachChecker::check).
#[derive(Error, Debug)]
pub enum CheckError {
    /// The email address was rejected before any request was made
    #[error(transparent)]
    InvalidEmail(#[from] BreachscopeError),

    /// The lookup itself failed
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl CheckError {
    /// Message shown to the person running the check.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(BreachscopeError::Validation(msg)) => msg.clone(),
            Self::Lookup(err) => err.user_message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransportFailure {
    Connect,
    Timeout,
    Other,
}

impl TransportFailure {
    fn classify(is_connect: bool, is_timeout: bool) -> Self {
        if is_connect {
            Self::Connect
        } else if is_timeout {
            Self::Timeout
        } else {
            Self::Other
        }
    }
}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
