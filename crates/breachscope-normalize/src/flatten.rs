//! Recursive flattener: turns a located node into an ordered list of breach names.
//!
//! Every node kind degrades gracefully. The only failure is the depth guard,
//! which protects against hostile payloads nested past any real response.

use crate::error::{NormalizeError, Result};
use breachscope_core::BreachName;
use serde_json::{Map, Value};

/// Record fields that may carry a breach name, in priority order.
pub const NAME_FIELDS: &[&str] = &["breach", "name", "domain", "site", "Name", "Breach", "title"];

/// Default nesting limit for [`Flattener::default`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flattener {
    max_depth: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Flattener {
    /// `max_depth` counts nested lists and objects below the starting node.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Flatten `node` into breach names, preserving order and duplicates.
    ///
    /// # Errors
    /// Returns [`NormalizeError::DepthExceeded`] when nesting exceeds the limit.
    pub fn flatten(&self, node: &Value) -> Result<Vec<BreachName>> {
        let mut names = Vec::new();
        self.flatten_node(node, 0, &mut names)?;
        Ok(names)
    }

    fn flatten_node(&self, node: &Value, depth: usize, out: &mut Vec<BreachName>) -> Result<()> {
        if depth > self.max_depth {
            return Err(NormalizeError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        match node {
            Value::String(s) => push_name(out, s.clone()),
            Value::Array(items) => {
                for item in items {
                    self.flatten_item(item, depth, out)?;
                }
            }
            Value::Object(map) => {
                // Only list and string values count at object level.
                for value in map.values() {
                    match value {
                        Value::Array(_) => self.flatten_node(value, depth + 1, out)?,
                        Value::String(s) => push_name(out, s.clone()),
                        _ => {}
                    }
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
        Ok(())
    }

    fn flatten_item(&self, item: &Value, depth: usize, out: &mut Vec<BreachName>) -> Result<()> {
        match item {
            Value::String(s) => push_name(out, s.clone()),
            Value::Array(_) => self.flatten_node(item, depth + 1, out)?,
            Value::Object(record) => push_name(out, record_name(record, item)),
            Value::Null => {}
            Value::Bool(_) | Value::Number(_) => push_name(out, item.to_string()),
        }
        Ok(())
    }
}

/// Resolve a record object to a display name.
///
/// Falls back to the compact JSON of the whole record so it is never dropped.
fn record_name(record: &Map<String, Value>, whole: &Value) -> String {
    NAME_FIELDS
        .iter()
        .filter_map(|field| record.get(*field))
        .filter(|value| is_truthy(value))
        .map(display_string)
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| whole.to_string())
}

fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Empty strings, zero, `false`, null and empty containers do not name a record.
#[allow(clippy::float_cmp)]
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn push_name(out: &mut Vec<BreachName>, name: String) {
    if let Some(name) = BreachName::new(name) {
        out.push(name);
    }
}
