//! # Faultlog
//!
//! Generic error logging over a timestamped success/failure outcome type.
//!
//! ## Features
//!
//! - [`Outcome`]: a result whose failures carry the time they were captured
//! - [`ErrorLogger`]: collects failures from a stream of outcomes, in order
//! - Separate ingestion ([`Logger`]) and read ([`ErrorDumper`]) roles, so a
//!   broad logger accepts narrow errors and a narrow logger reads as broad
//! - Integration with the `tracing` ecosystem for the crate's own diagnostics
//!
//! ## Example
//!
//! ```rust
//! use faultlog::{ApiError, ErrorLogger, Outcome, SharedError};
//!
//! let logger: ErrorLogger<SharedError> = ErrorLogger::new();
//! logger.log(Outcome::<_, ApiError>::success("ok"));
//! logger.log(Outcome::<(), _>::failure(ApiError::Network));
//!
//! let mut out = Vec::new();
//! logger.write_log(&mut out)?;
//! assert!(String::from_utf8_lossy(&out).ends_with(": Not connected\n"));
//! # Ok::<(), faultlog::Error>(())
//! ```

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod fault;
pub mod logger;
pub mod outcome;
pub mod timestamp;
pub mod tracing_init;

pub use api::ApiError;
pub use builder::LogBuilder;
pub use config::LogConfig;
pub use error::{Error, Result};
pub use fault::{Fault, SharedError};
pub use logger::{ErrorDumper, ErrorLogger, LogEntry, Logger};
pub use outcome::{Failure, Outcome};
pub use timestamp::{Timestamp, TimestampFormat};
pub use tracing_init::init_logging;

/// Start building a logging configuration.
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}
