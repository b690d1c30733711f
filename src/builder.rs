//! Builder pattern for configuring diagnostics and creating error loggers.
//!
//! # Example
//!
//! ```rust,no_run
//! use faultlog::{ApiError, ErrorLogger, TimestampFormat};
//!
//! let builder = faultlog::builder()
//!     .with_console(true)
//!     .with_level("debug")
//!     .with_timestamp(TimestampFormat::Rfc3339);
//!
//! let logger: ErrorLogger<ApiError> = builder.logger();
//! builder.init().expect("Failed to initialize logging");
//! ```

use crate::init_logging;
use crate::{ErrorLogger, LogConfig, Result, TimestampFormat};

/// A builder for a [`LogConfig`].
///
/// The finished configuration can install the diagnostic subscriber
/// ([`init`](Self::init)) and create any number of [`ErrorLogger`]s that share
/// its timestamp format ([`logger`](Self::logger)).
#[derive(Debug, Clone)]
pub struct LogBuilder {
    config: LogConfig,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::new(),
        }
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self { config }
    }

    /// Enable or disable console diagnostics.
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config = self.config.with_console(enabled);
        self
    }

    /// Set the diagnostic level (e.g., "trace", "debug", "info", "warn", "error").
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config = self.config.with_level(level.into());
        self
    }

    /// Set the diagnostic output format ("text" or "json").
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.config = self.config.with_format(format.into());
        self
    }

    /// Set how loggers render timestamps when dumping.
    pub fn with_timestamp(mut self, timestamp: TimestampFormat) -> Self {
        self.config = self.config.with_timestamp(timestamp);
        self
    }

    /// Show target/module in diagnostics
    pub fn with_target(mut self, target: bool) -> Self {
        self.config = self.config.with_target(target);
        self
    }

    /// Show thread IDs in diagnostics
    pub fn with_thread_ids(mut self, thread_ids: bool) -> Self {
        self.config = self.config.with_thread_ids(thread_ids);
        self
    }

    /// Show thread names in diagnostics
    pub fn with_thread_names(mut self, thread_names: bool) -> Self {
        self.config = self.config.with_thread_names(thread_names);
        self
    }

    /// Get the current configuration without initializing.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Create an empty error logger using the configured timestamp format.
    pub fn logger<E>(&self) -> ErrorLogger<E> {
        ErrorLogger::from_config(&self.config)
    }

    /// Install the global diagnostic subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - A global subscriber is already installed
    pub fn init(self) -> Result<()> {
        init_logging(&self.config, None)
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
