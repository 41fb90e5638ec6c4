//! Centralized configuration for the Codebreaker client
//!
//! This module provides a single source of truth for all configuration values
//! used to reach the Codebreaker service.
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override defaults:
//! - `CODEBREAKER_API_URL`: Override the default service base URL
//! - `CODEBREAKER_TIMEOUT_SECS`: Override the request timeout

/// Default service base URL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/codebreaker";

/// Environment variable name for overriding the API URL
pub const API_URL_ENV_VAR: &str = "CODEBREAKER_API_URL";

/// Environment variable name for overriding the request timeout
pub const TIMEOUT_ENV_VAR: &str = "CODEBREAKER_TIMEOUT_SECS";

/// Default API timeout in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("codebreaker/", env!("CARGO_PKG_VERSION"));
