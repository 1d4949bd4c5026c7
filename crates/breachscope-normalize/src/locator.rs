//! Payload locator: finds the part of a lookup response that holds breach records.
//!
//! The lookup service has no stable schema, so the locator walks an ordered
//! table of probe rules. The first key present in the response wins, whatever
//! the shape of its value; the flattener copes with that shape afterwards.

use crate::error::{NormalizeError, Result};
use serde_json::{Map, Value};
use tracing::debug;

/// Key under which some responses nest their breach list one level deeper.
pub const EXPOSED_BREACHES: &str = "ExposedBreaches";

/// Keys probed inside an `ExposedBreaches` object, in priority order.
pub const EXPOSED_BREACHES_KEYS: &[&str] = &["breaches_details", "breaches", "Breaches"];

/// How the value found under a probed key is turned into the located node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Use the value as-is.
    Direct,
    /// If the value is an object, prefer the first present nested key.
    /// Falls back to the object itself when none is present.
    Drill(&'static [&'static str]),
}

/// One entry of the probe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRule {
    pub key: &'static str,
    pub extraction: Extraction,
}

impl ProbeRule {
    const fn direct(key: &'static str) -> Self {
        Self {
            key,
            extraction: Extraction::Direct,
        }
    }

    const fn drill(key: &'static str, nested: &'static [&'static str]) -> Self {
        Self {
            key,
            extraction: Extraction::Drill(nested),
        }
    }

    fn extract<'a>(&self, value: &'a Value) -> &'a Value {
        match (self.extraction, value) {
            (Extraction::Drill(keys), Value::Object(nested)) => {
                first_present(nested, keys).unwrap_or(value)
            }
            _ => value,
        }
    }
}

/// Top-level keys probed in a response object, in priority order.
pub const PROBE_RULES: &[ProbeRule] = &[
    ProbeRule::direct("breaches"),
    ProbeRule::direct("Breaches"),
    ProbeRule::direct("BREACHES"),
    ProbeRule::direct("breaches_details"),
    ProbeRule::direct("BreachesDetails"),
    ProbeRule::drill(EXPOSED_BREACHES, EXPOSED_BREACHES_KEYS),
    ProbeRule::direct("exposed_breaches"),
    ProbeRule::direct("data"),
    ProbeRule::direct("Data"),
    ProbeRule::direct("results"),
    ProbeRule::direct("Results"),
];

/// Find the node holding breach records.
///
/// Lists are returned as-is. Objects go through [`PROBE_RULES`], then the
/// `ExposedBreaches` drill, then the first list-valued entry. `Ok(None)` means
/// nothing plausible was found, which callers treat as zero breaches.
///
/// # Errors
/// Returns [`NormalizeError::NotAContainer`] for scalar payloads.
pub fn locate(payload: &Value) -> Result<Option<&Value>> {
    match payload {
        Value::Array(_) => Ok(Some(payload)),
        Value::Object(map) => Ok(locate_in_object(map)),
        other => Err(NormalizeError::NotAContainer {
            kind: value_kind(other),
        }),
    }
}

fn locate_in_object(map: &Map<String, Value>) -> Option<&Value> {
    let probed = PROBE_RULES
        .iter()
        .find_map(|rule| map.get(rule.key).map(|value| (rule, value)));

    if let Some((rule, value)) = probed {
        if !value.is_null() {
            debug!(key = rule.key, "breach records located by key probe");
            return Some(rule.extract(value));
        }
        // A null under the first present key ends the key probe.
        debug!(key = rule.key, "probed key holds null");
    }

    match map.get(EXPOSED_BREACHES) {
        Some(Value::Object(nested)) => {
            if let Some(found) = first_present(nested, EXPOSED_BREACHES_KEYS) {
                debug!("breach records located inside {EXPOSED_BREACHES}");
                return Some(found);
            }
        }
        Some(exposed @ Value::Array(_)) => return Some(exposed),
        _ => {}
    }

    let fallback = map.values().find(|value| value.is_array());
    if fallback.is_some() {
        debug!("breach records located by list scan");
    } else {
        debug!("no breach records located");
    }
    fallback
}

/// Value of the first key of `keys` present in `map`, unless that value is null.
fn first_present<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| map.get(*key))
        .filter(|value| !value.is_null())
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
