//! Breachscope Normalize - turns loosely structured breach lookup responses
//! into a flat list of breach names.
//!
//! The lookup service does not guarantee a schema: keys change case, breach
//! lists arrive nested inside other lists, and records are sometimes plain
//! strings and sometimes objects. Normalization runs in two steps:
//!
//! 1. [`locate`] picks the node that plausibly holds the breach records,
//!    driven by the ordered [`PROBE_RULES`] table.
//! 2. [`Flattener`] walks that node and resolves every record to a
//!    [`BreachName`](breachscope_core::BreachName), keeping order and duplicates.
//!
//! # Example
//!
//! ```rust
//! use breachscope_normalize::Normalizer;
//! use serde_json::json;
//!
//! let payload = json!({"breaches": [["Adobe", "LinkedIn"]]});
//! let result = Normalizer::default().normalize(&payload).unwrap();
//!
//! assert_eq!(result.count(), 2);
//! assert_eq!(result.breaches()[0].as_str(), "Adobe");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod error;
#[allow(missing_docs)]
pub mod flatten;
#[allow(missing_docs)]
pub mod locator;
#[allow(missing_docs)]
pub mod normalizer;

// Re-export commonly used types
pub use error::{NormalizeError, Result};
pub use flatten::{Flattener, DEFAULT_MAX_DEPTH, NAME_FIELDS};
pub use locator::{locate, Extraction, ProbeRule, PROBE_RULES};
pub use normalizer::{NormalizedResult, Normalizer};

/// Flatten `node` with the default depth limit.
pub fn flatten(node: &serde_json::Value) -> Result<Vec<breachscope_core::BreachName>> {
    Flattener::default().flatten(node)
}
