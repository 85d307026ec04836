//! Tracing Setup
//!
//! `TigerStyle`: Logging is optional. The library only emits `tracing`
//! events; binaries and tests opt in to printing them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use killer_core::telemetry::{init_tracing, TelemetryConfig};
//!
//! // Reads KILLER_LOG, falls back to "info"
//! init_tracing(TelemetryConfig::default()).expect("tracing init");
//!
//! // Or configure explicitly
//! let config = TelemetryConfig::builder()
//!     .filter("killer_core=debug")
//!     .ansi(false)
//!     .build();
//! ```
//!
//! ## Environment Variables
//!
//! - `KILLER_LOG` - `EnvFilter` directives (default: "info")

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "KILLER_LOG";

/// Default filter directives.
pub const LOG_FILTER_DEFAULT: &str = "info";

/// Tracing setup errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Filter directives could not be parsed
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidFilter {
        /// The rejected directives
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("tracing initialization failed: {reason}")]
    InitFailed {
        /// The reason for the failure
        reason: String,
    },
}

/// Result type for tracing setup
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Configuration for the fmt subscriber
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives, e.g. "`killer_core=debug`"
    pub filter: String,

    /// Whether to colour output
    pub ansi: bool,

    /// Whether to print event targets
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| LOG_FILTER_DEFAULT.to_string()),
            ansi: true,
            with_target: true,
        }
    }
}

impl TelemetryConfig {
    /// Create a new builder for `TelemetryConfig`
    #[must_use]
    pub fn builder() -> TelemetryConfigBuilder {
        TelemetryConfigBuilder::default()
    }

    fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter).map_err(|e| TelemetryError::InvalidFilter {
            filter: self.filter.clone(),
            reason: e.to_string(),
        })
    }
}

/// Builder for `TelemetryConfig`
#[derive(Debug, Default)]
pub struct TelemetryConfigBuilder {
    filter: Option<String>,
    ansi: Option<bool>,
    with_target: Option<bool>,
}

impl TelemetryConfigBuilder {
    /// Set the filter directives
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Enable or disable coloured output
    #[must_use]
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// Enable or disable event targets
    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = Some(with_target);
        self
    }

    /// Build the `TelemetryConfig`
    #[must_use]
    pub fn build(self) -> TelemetryConfig {
        let default = TelemetryConfig::default();
        TelemetryConfig {
            filter: self.filter.unwrap_or(default.filter),
            ansi: self.ansi.unwrap_or(default.ansi),
            with_target: self.with_target.unwrap_or(default.with_target),
        }
    }
}

/// Install a global fmt subscriber.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if the directives do not parse and
/// `TelemetryError::InitFailed` if a global subscriber is already set.
pub fn init_tracing(config: TelemetryConfig) -> Result<()> {
    let filter = config.env_filter()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .try_init()
        .map_err(|e| TelemetryError::InitFailed {
            reason: e.to_string(),
        })?;

    tracing::debug!(filter = %config.filter, "tracing initialized");
    Ok(())
}

/// Install a test writer subscriber, ignoring "already set" failures.
///
/// Safe to call from every test.
pub fn init_test_tracing() {
    let filter = TelemetryConfig::default()
        .env_filter()
        .unwrap_or_else(|_| EnvFilter::new(LOG_FILTER_DEFAULT));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telemetry_config_builder() {
        let config = TelemetryConfig::builder()
            .filter("killer_core=trace")
            .ansi(false)
            .with_target(false)
            .build();

        assert_eq!(config.filter, "killer_core=trace");
        assert!(!config.ansi);
        assert!(!config.with_target);
    }

    #[test]
    fn test_invalid_filter_rejected() {
        let config = TelemetryConfig::builder().filter("killer_core=loud").build();
        let err = init_tracing(config).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
    }

    #[test]
    fn test_second_init_fails() {
        init_test_tracing();
        let config = TelemetryConfig::builder().filter("info").build();
        assert!(matches!(
            init_tracing(config),
            Err(TelemetryError::InitFailed { .. })
        ));
    }
}
