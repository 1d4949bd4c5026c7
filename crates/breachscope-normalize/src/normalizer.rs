//! Locate-then-flatten pipeline and its result type.

use crate::error::Result;
use crate::flatten::{Flattener, DEFAULT_MAX_DEPTH};
use crate::locator::locate;
use breachscope_core::{BreachName, NormalizeConfig};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use tracing::debug;

/// Ordered breach names from one payload, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedResult {
    breaches: Vec<BreachName>,
}

impl NormalizedResult {
    #[must_use]
    pub fn new(breaches: Vec<BreachName>) -> Self {
        Self { breaches }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The reported breach count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.breaches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breaches.is_empty()
    }

    #[must_use]
    pub fn breaches(&self) -> &[BreachName] {
        &self.breaches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BreachName> {
        self.breaches.iter()
    }

    #[must_use]
    pub fn into_breaches(self) -> Vec<BreachName> {
        self.breaches
    }
}

impl<'a> IntoIterator for &'a NormalizedResult {
    type Item = &'a BreachName;
    type IntoIter = std::slice::Iter<'a, BreachName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for NormalizedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NormalizedResult", 2)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("breaches", &self.breaches)?;
        state.end()
    }
}

/// Runs the payload locator and the flattener over a decoded response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    flattener: Flattener,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Normalizer {
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            flattener: Flattener::new(max_depth),
        }
    }

    #[must_use]
    pub fn from_config(config: &NormalizeConfig) -> Self {
        Self::new(config.max_depth)
    }

    /// Extract the breach list from `payload`.
    ///
    /// A payload with no recognizable breach node yields an empty result.
    /// Errors are returned rather than swallowed; callers decide whether to
    /// present them as zero breaches.
    pub fn normalize(&self, payload: &Value) -> Result<NormalizedResult> {
        let Some(located) = locate(payload)? else {
            return Ok(NormalizedResult::empty());
        };

        let breaches = self.flattener.flatten(located)?;
        debug!(count = breaches.len(), "payload normalized");
        Ok(NormalizedResult::new(breaches))
    }
}
