use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{Fault, LogConfig, Outcome, Result, Timestamp, TimestampFormat};

/// A failure recorded by an [`ErrorLogger`]: when it was captured and what it was.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry<E> {
    timestamp: Timestamp,
    error: E,
}

impl<E> LogEntry<E> {
    pub(crate) fn new(timestamp: Timestamp, error: E) -> Self {
        Self { timestamp, error }
    }

    /// Capture time of the originating failure.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_parts(self) -> (Timestamp, E) {
        (self.timestamp, self.error)
    }

    fn map_error<F>(self, convert: impl FnOnce(E) -> F) -> LogEntry<F> {
        LogEntry::new(self.timestamp, convert(self.error))
    }
}

/// Ingestion side of a logger: accepts outcomes whose errors are `E`.
///
/// An `ErrorLogger<E>` implements `Logger<F>` for every `F: Into<E>`, so a
/// logger of a broad category can be handed to code that only produces a
/// narrower one.
pub trait Logger<E> {
    /// Record `outcome` if it is a failure; successes are ignored.
    fn log<V>(&self, outcome: Outcome<V, E>);

    /// Write one `Error at <timestamp>: <message>` line per recorded failure.
    fn write_log<W: Write>(&self, out: W) -> Result<()>;

    /// Write the log to standard output.
    fn dump_log(&self) -> Result<()> {
        self.write_log(io::stdout().lock())
    }
}

/// Read side of a logger: produces the recorded entries as `E`.
///
/// An `ErrorLogger<E>` implements `ErrorDumper<F>` for every `F` that `E`
/// converts into, so a narrow logger can be read as a broad one.
pub trait ErrorDumper<E> {
    /// Independent copy of every recorded entry, oldest first.
    fn dump(&self) -> Vec<LogEntry<E>>;
}

/// Accumulates the failures found in a stream of [`Outcome`]s.
///
/// Entries are kept in the order they were logged and are never removed.
/// Appends are serialized by a mutex, so a logger can be shared between
/// threads behind an `Arc`.
#[derive(Debug)]
pub struct ErrorLogger<E> {
    entries: Mutex<Vec<LogEntry<E>>>,
    timestamp_format: TimestampFormat,
}

impl<E> ErrorLogger<E> {
    /// Create an empty logger rendering timestamps as ISO 8601.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Create an empty logger using the timestamp format from `config`.
    pub fn from_config(config: &LogConfig) -> Self {
        Self::new().with_timestamp_format(config.timestamp)
    }

    /// Set how timestamps are rendered by [`write_log`](Self::write_log).
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    // Every push leaves the vector consistent, so a poisoned lock is still usable.
    fn entries(&self) -> MutexGuard<'_, Vec<LogEntry<E>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Fault> ErrorLogger<E> {
    /// Record `outcome` if it is a failure, converting its error into `E`.
    pub fn log<V, F: Into<E>>(&self, outcome: Outcome<V, F>) {
        match outcome {
            Outcome::Success(_) => {
                tracing::trace!("Ignoring successful outcome");
            }
            Outcome::Failure(failure) => {
                let (timestamp, error) = failure.into_parts();
                let error: E = error.into();
                tracing::debug!(%timestamp, error = %error, "Recording failure");
                self.entries().push(LogEntry::new(timestamp, error));
            }
        }
    }

    /// Write one `Error at <timestamp>: <message>` line per entry to `out`.
    ///
    /// Lines are rendered before writing so the entry lock is not held
    /// during I/O.
    pub fn write_log<W: Write>(&self, mut out: W) -> Result<()> {
        let lines = {
            let entries = self.entries();
            tracing::trace!(entries = entries.len(), "Dumping error log");
            entries
                .iter()
                .map(|entry| -> Result<String> {
                    let at = entry.timestamp.format(self.timestamp_format)?;
                    Ok(format!("Error at {}: {}", at, entry.error))
                })
                .collect::<Result<Vec<_>>>()?
        };

        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the log to standard output.
    pub fn dump_log(&self) -> Result<()> {
        self.write_log(io::stdout().lock())
    }
}

impl<E: Clone> ErrorLogger<E> {
    /// Independent copy of every recorded entry, oldest first.
    pub fn dump(&self) -> Vec<LogEntry<E>> {
        self.entries().clone()
    }
}

impl<E> Default for ErrorLogger<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, F> Logger<F> for ErrorLogger<E>
where
    E: Fault,
    F: Into<E>,
{
    fn log<V>(&self, outcome: Outcome<V, F>) {
        ErrorLogger::log(self, outcome);
    }

    fn write_log<W: Write>(&self, out: W) -> Result<()> {
        ErrorLogger::write_log(self, out)
    }
}

impl<E, F> ErrorDumper<F> for ErrorLogger<E>
where
    E: Clone + Into<F>,
{
    fn dump(&self) -> Vec<LogEntry<F>> {
        self.entries()
            .iter()
            .cloned()
            .map(|entry| entry.map_error(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiError, SharedError};

    fn lines(logger: &ErrorLogger<impl Fault>) -> Vec<String> {
        let mut out = Vec::new();
        logger.write_log(&mut out).expect("write log");
        String::from_utf8(out)
            .expect("utf8")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_new_logger_is_empty() {
        let logger: ErrorLogger<ApiError> = ErrorLogger::new();
        assert!(logger.is_empty());
        assert_eq!(logger.len(), 0);
        assert!(logger.dump().is_empty());
        assert!(lines(&logger).is_empty());
    }

    #[test]
    fn test_success_is_ignored() {
        let logger: ErrorLogger<ApiError> = ErrorLogger::new();
        logger.log(Outcome::<_, ApiError>::success("Success"));
        logger.log(Outcome::<_, ApiError>::success(42));
        assert!(logger.is_empty());
    }

    #[test]
    fn test_failure_is_recorded_with_its_capture_time() {
        let logger: ErrorLogger<ApiError> = ErrorLogger::new();
        let outcome: Outcome<(), ApiError> = Outcome::failure(ApiError::Network);
        let captured = outcome.as_failure().unwrap().captured_at();
        logger.log(outcome);

        let entries = logger.dump();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp(), captured);
        assert_eq!(entries[0].error(), &ApiError::Network);
    }

    #[test]
    fn test_write_log_format() {
        let logger: ErrorLogger<ApiError> = ErrorLogger::new();
        logger.log(Outcome::<(), _>::failure(ApiError::NotAuthorized));
        let entry = logger.dump().remove(0);

        let expected = format!("Error at {}: Not authorized", entry.timestamp());
        assert_eq!(lines(&logger), vec![expected]);
    }

    #[test]
    fn test_write_log_uses_configured_format() {
        let logger: ErrorLogger<ApiError> =
            ErrorLogger::new().with_timestamp_format(TimestampFormat::Rfc3339);
        logger.log(Outcome::<(), _>::failure(ApiError::Unknown));
        let entry = logger.dump().remove(0);

        let at = entry.timestamp().format(TimestampFormat::Rfc3339).unwrap();
        assert_eq!(lines(&logger), vec![format!("Error at {}: Unknown exception", at)]);
    }

    #[test]
    fn test_from_config() {
        let config = LogConfig::new().with_timestamp(TimestampFormat::Rfc3339);
        let logger: ErrorLogger<ApiError> = ErrorLogger::from_config(&config);
        assert_eq!(logger.timestamp_format(), TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_broad_logger_converts_narrow_errors() {
        let logger: ErrorLogger<SharedError> = ErrorLogger::new();
        logger.log(Outcome::<(), _>::failure(ApiError::Network));

        let entries = logger.dump();
        assert_eq!(entries[0].error().to_string(), "Not connected");
        assert_eq!(
            entries[0].error().downcast_ref::<ApiError>(),
            Some(&ApiError::Network)
        );
    }

    #[test]
    fn test_narrow_logger_dumps_as_broad() {
        let logger: ErrorLogger<ApiError> = ErrorLogger::new();
        logger.log(Outcome::<(), _>::failure(ApiError::Unknown));

        let broad: Vec<LogEntry<SharedError>> = ErrorDumper::<SharedError>::dump(&logger);
        assert_eq!(broad.len(), 1);
        assert_eq!(broad[0].error().to_string(), "Unknown exception");
        assert_eq!(broad[0].timestamp(), logger.dump()[0].timestamp());
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let logger = std::sync::Arc::new(ErrorLogger::<ApiError>::new());
        logger.log(Outcome::<(), _>::failure(ApiError::Network));

        let poisoner = std::sync::Arc::clone(&logger);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries();
            panic!("poison the entry lock");
        })
        .join();

        logger.log(Outcome::<(), _>::failure(ApiError::Unknown));
        assert_eq!(logger.len(), 2);
    }
}
