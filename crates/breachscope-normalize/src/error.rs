use thiserror::Error;

/// Reasons a payload could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("payload is a {kind}, expected a list or an object")]
    NotAContainer { kind: &'static str },

    #[error("payload nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
