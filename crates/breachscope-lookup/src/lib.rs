//! Breachscope Lookup - breach lookups for email addresses.
//!
//! This crate queries the XposedOrNot service and turns its answer into a
//! [`Verdict`]. Transport problems surface as [`LookupError`]s with a
//! user-facing message; payloads that cannot be normalized become
//! [`Verdict::Undetermined`] rather than an error, so callers can choose how
//! to present them.
//!
//! # Example
//!
//! ```rust,no_run
//! use breachscope_lookup::{BreachChecker, XposedOrNotClient};
//! use breachscope_normalize::Normalizer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let checker = BreachChecker::new(XposedOrNotClient::new()?, Normalizer::default());
//! let report = checker.check("someone@example.com").await?;
//!
//! println!("{} breach(es)", report.verdict.breach_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod checker;
pub mod client;
pub mod error;

// Re-export commonly used types
pub use checker::{BreachChecker, CheckReport, Verdict};
pub use client::{BreachLookup, LookupOutcome, XposedOrNotClient};
pub use error::{CheckError, LookupError, Result};
