//! Shared types used across the Breachscope workspace.
//!
//! This module defines common newtypes that provide type safety
//! and clear domain modeling.

use crate::error::BreachscopeError;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for a validated, normalized email address.
///
/// Input is trimmed and lower-cased before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse user input into an `EmailAddress`.
    ///
    /// # Errors
    /// Returns a validation error if the input is blank or not a plausible address.
    pub fn parse(raw: &str) -> Result<Self, BreachscopeError> {
        let email = raw.trim().to_lowercase();

        if email.is_empty() {
            return Err(BreachscopeError::Validation(
                "Please enter an email address!".to_string(),
            ));
        }

        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
        });

        if regex.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(BreachscopeError::Validation(
                "Please enter a valid email address!".to_string(),
            ))
        }
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = BreachscopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

/// Display name of a single breach.
///
/// Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BreachName(String);

impl BreachName {
    /// Create a `BreachName`, returning `None` for blank input.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BreachName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BreachName {
    type Error = BreachscopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| BreachscopeError::Validation("breach name must not be empty".to_string()))
    }
}

impl From<BreachName> for String {
    fn from(name: BreachName) -> Self {
        name.0
    }
}

impl PartialEq<str> for BreachName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BreachName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Wrapper around `chrono::DateTime<Utc>` for consistent timestamp handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
