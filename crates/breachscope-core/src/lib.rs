//! Breachscope Core - Foundation crate for the Breachscope breach checker.
//!
//! This crate provides shared types, error handling and configuration
//! management that all other Breachscope crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`EmailAddress`, `BreachName`, `Timestamp`)
//!
//! # Example
//!
//! ```rust
//! use breachscope_core::{AppConfig, EmailAddress};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! assert_eq!(config.lookup.timeout_secs, 15);
//!
//! let email = EmailAddress::parse("  Someone@Example.com ")?;
//! assert_eq!(email.as_str(), "someone@example.com");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, LookupConfig, NormalizeConfig, OutputConfig};
pub use error::{BreachscopeError, ConfigError, ConfigResult};
pub use types::{BreachName, EmailAddress, Timestamp};
