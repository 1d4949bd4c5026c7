//! Check orchestration: validate, look up, normalize, decide.

use crate::client::{BreachLookup, LookupOutcome};
use crate::error::CheckError;
use breachscope_core::{EmailAddress, Timestamp};
use breachscope_normalize::{NormalizeError, NormalizedResult, Normalizer};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Conclusion of one check.
///
/// `Undetermined` is kept apart from `Safe` even though the text report
/// renders both the same way by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// No breaches listed for the address.
    Safe,
    /// The address appears in at least one breach.
    Exposed {
        /// Breach names and their count
        #[serde(flatten)]
        result: NormalizedResult,
    },
    /// The service answered but its payload could not be read.
    Undetermined {
        /// Why normalization failed
        reason: String,
    },
}

impl Verdict {
    /// Turn a normalization outcome into a verdict.
    #[must_use]
    pub fn from_normalization(outcome: Result<NormalizedResult, NormalizeError>) -> Self {
        match outcome {
            Ok(result) if result.is_empty() => Self::Safe,
            Ok(result) => Self::Exposed { result },
            Err(err) => {
                warn!(error = %err, "could not normalize lookup response");
                Self::Undetermined {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Number of breaches found; zero unless exposed.
    #[must_use]
    pub fn breach_count(&self) -> usize {
        match self {
            Self::Exposed { result } => result.count(),
            Self::Safe | Self::Undetermined { .. } => 0,
        }
    }
}

/// Result of checking one address.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Normalized address that was checked
    pub email: EmailAddress,
    /// What the check concluded
    #[serde(flatten)]
    pub verdict: Verdict,
    /// When the check finished
    pub checked_at: Timestamp,
}

impl CheckReport {
    /// Create a report stamped with the current time.
    #[must_use]
    pub fn new(email: EmailAddress, verdict: Verdict) -> Self {
        Self {
            email,
            verdict,
            checked_at: Timestamp::now(),
        }
    }
}

/// Runs a complete breach check against a [`BreachLookup`].
pub struct BreachChecker<L> {
    lookup: L,
    normalizer: Normalizer,
}

impl<L: BreachLookup> BreachChecker<L> {
    /// Create a checker from a lookup backend and a normalizer.
    pub fn new(lookup: L, normalizer: Normalizer) -> Self {
        Self { lookup, normalizer }
    }

    /// Check `raw_email` as typed by the user.
    ///
    /// The address is trimmed, lower-cased and validated before any request.
    /// A "not found" answer is safe without touching the normalizer.
    pub async fn check(&self, raw_email: &str) -> Result<CheckReport, CheckError> {
        let email = EmailAddress::parse(raw_email)?;
        info!(service = self.lookup.service_name(), "checking address");

        let verdict = match self.lookup.check_email(&email).await? {
            LookupOutcome::NotFound => {
                debug!("address not listed by lookup service");
                Verdict::Safe
            }
            LookupOutcome::Found(payload) => self.check_payload(&payload),
        };

        info!(breaches = verdict.breach_count(), "check finished");
        Ok(CheckReport::new(email, verdict))
    }

    /// Decide the verdict for an already decoded payload.
    #[must_use]
    pub fn check_payload(&self, payload: &Value) -> Verdict {
        Verdict::from_normalization(self.normalizer.normalize(payload))
    }
}
