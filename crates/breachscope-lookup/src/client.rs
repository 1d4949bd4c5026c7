//! XposedOrNot lookup client.

use crate::error::{LookupError, Result};
use async_trait::async_trait;
use breachscope_core::{EmailAddress, LookupConfig};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// What the lookup service said about an address.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The service returned a payload; it still has to be normalized.
    Found(Value),
    /// The service does not know the address.
    NotFound,
}

/// A source of breach data for email addresses.
#[async_trait]
pub trait BreachLookup: Send + Sync {
    /// Query the service for `email`.
    async fn check_email(&self, email: &EmailAddress) -> Result<LookupOutcome>;

    /// Short identifier used in logs.
    fn service_name(&self) -> &'static str;
}

#[async_trait]
impl<T: BreachLookup + ?Sized> BreachLookup for Arc<T> {
    async fn check_email(&self, email: &EmailAddress) -> Result<LookupOutcome> {
        (**self).check_email(email).await
    }

    fn service_name(&self) -> &'static str {
        (**self).service_name()
    }
}

/// Client for the XposedOrNot `check-email` endpoint.
pub struct XposedOrNotClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl XposedOrNotClient {
    /// Create a client with default settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::from_config(&LookupConfig::default())
    }

    /// Create a client from lookup settings.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| LookupError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// URL queried for `email`.
    #[must_use]
    pub fn check_url(&self, email: &EmailAddress) -> String {
        format!(
            "{}/check-email/{}",
            self.base_url,
            urlencoding::encode(email.as_str())
        )
    }
}

#[async_trait]
impl BreachLookup for XposedOrNotClient {
    async fn check_email(&self, email: &EmailAddress) -> Result<LookupOutcome> {
        debug!(base_url = %self.base_url, "sending check-email request");

        let response = self
            .client
            .get(self.check_url(email))
            .send()
            .await
            .map_err(|e| LookupError::from_transport(e, self.timeout_secs))?;

        let status = response.status();
        debug!(status = status.as_u16(), "check-email response received");

        // Only a 200 body carries breach data.
        if status != StatusCode::OK {
            return interpret_response(status, "");
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::from_transport(e, self.timeout_secs))?;
        interpret_response(status, &body)
    }

    fn service_name(&self) -> &'static str {
        "xposedornot"
    }
}

/// Map a `check-email` status and body to an outcome.
pub(crate) fn interpret_response(status: StatusCode, body: &str) -> Result<LookupOutcome> {
    match status {
        StatusCode::OK => serde_json::from_str(body)
            .map(LookupOutcome::Found)
            .map_err(|e| LookupError::InvalidBody(e.to_string())),
        StatusCode::NOT_FOUND => Ok(LookupOutcome::NotFound),
        other => Err(LookupError::UnexpectedStatus {
            status: other.as_u16(),
        }),
    }
}
