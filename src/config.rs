use serde::{Deserialize, Serialize};

use crate::{Error, Result, TimestampFormat};

/// Configuration for error loggers and the crate's own diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Emit diagnostics to the console
    #[serde(default)]
    pub console: bool,
    /// Diagnostic level (e.g., "info", "debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Diagnostic format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
    /// How dumped error lines render their timestamps
    #[serde(default)]
    pub timestamp: TimestampFormat,
    /// Show target/module in diagnostics
    #[serde(default)]
    pub target: bool,
    /// Show thread IDs in diagnostics
    #[serde(default)]
    pub thread_ids: bool,
    /// Show thread names in diagnostics
    #[serde(default)]
    pub thread_names: bool,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            console: false,
            level: default_log_level(),
            format: default_format(),
            timestamp: TimestampFormat::default(),
            target: false,
            thread_ids: false,
            thread_names: false,
        }
    }

    /// Enable console diagnostics
    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Set diagnostic level
    pub fn with_level(mut self, level: String) -> Self {
        self.level = level;
        self
    }

    /// Set diagnostic format
    pub fn with_format(mut self, format: String) -> Self {
        self.format = format;
        self
    }

    /// Set the timestamp format used when dumping errors
    pub fn with_timestamp(mut self, timestamp: TimestampFormat) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Show target/module in diagnostics
    pub fn with_target(mut self, target: bool) -> Self {
        self.target = target;
        self
    }

    /// Show thread IDs in diagnostics
    pub fn with_thread_ids(mut self, thread_ids: bool) -> Self {
        self.thread_ids = thread_ids;
        self
    }

    /// Show thread names in diagnostics
    pub fn with_thread_names(mut self, thread_names: bool) -> Self {
        self.thread_names = thread_names;
        self
    }

    /// Check that the level and format are usable.
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(Error::Config("log level must not be empty".to_string()));
        }
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            other => Err(Error::Config(format!(
                "unknown format: {}, supported: text/json",
                other
            ))),
        }
    }

    pub(crate) fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}
