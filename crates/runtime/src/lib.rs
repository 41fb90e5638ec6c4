//! Core functionality for the Codebreaker client
//!
//! This crate contains the API client generated from `openapi.yaml`, the
//! configuration it is built from, the service facade with its error
//! taxonomy, and the dependency injection interfaces used by the commands.

/// API client module for interacting with the Codebreaker service
pub mod api_client;
/// Configuration constants and types
pub mod config;
/// Dependency injection traits and implementations
pub mod deps;
/// Service error taxonomy
pub mod error;

// Re-export commonly used types at the crate root
pub use api_client::{ApiConfig, types};
pub use config::{API_URL_ENV_VAR, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, TIMEOUT_ENV_VAR};
pub use deps::{
    CodebreakerService, MessageStyle, ProgressIndicator, RealCodebreakerService, UserInterface,
};
pub use error::ServiceError;
