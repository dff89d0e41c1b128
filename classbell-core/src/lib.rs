//! Core shared library for Classbell.
//!
//! Holds what every other crate in the workspace leans on: the canonical
//! error type, environment-driven configuration and tracing setup.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{ClassbellConfig, Environment};
pub use errors::{ClassbellError, ConfigError, Result as CoreResult};
