use crate::{Fault, Timestamp};

/// The error half of an [`Outcome`], stamped with the time it was captured.
///
/// Fields are private: the capture time is always taken from the clock when
/// the failure is constructed and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure<E> {
    error: E,
    captured_at: Timestamp,
}

impl<E: Fault> Failure<E> {
    /// Capture `error` at the current wall-clock time.
    pub fn new(error: E) -> Self {
        Self {
            error,
            captured_at: Timestamp::now(),
        }
    }
}

impl<E> Failure<E> {
    /// The carried error.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// When this failure was constructed.
    pub fn captured_at(&self) -> Timestamp {
        self.captured_at
    }

    /// Split into capture time and error.
    pub fn into_parts(self) -> (Timestamp, E) {
        (self.captured_at, self.error)
    }
}

/// Outcome of an operation whose expected failures are values, not panics.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<V, E> {
    /// The operation produced a value.
    Success(V),
    /// The operation failed.
    Failure(Failure<E>),
}

impl<V, E> Outcome<V, E> {
    /// Wrap a successful value.
    ///
    /// Nothing here fixes the error type. Outside code generic over a
    /// [`Logger`](crate::Logger) it has to be named:
    ///
    /// ```rust
    /// use faultlog::{ApiError, ErrorLogger, Outcome};
    ///
    /// let logger: ErrorLogger<ApiError> = ErrorLogger::new();
    /// logger.log(Outcome::<_, ApiError>::success("ok"));
    /// assert!(logger.is_empty());
    /// ```
    pub fn success(value: V) -> Self {
        Outcome::Success(value)
    }

    /// Wrap an error, stamping it with the current time.
    pub fn failure(error: E) -> Self
    where
        E: Fault,
    {
        Outcome::Failure(Failure::new(error))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn as_success(&self) -> Option<&V> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn as_failure(&self) -> Option<&Failure<E>> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Convert into a standard `Result`, keeping the capture time.
    pub fn into_result(self) -> Result<V, Failure<E>> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

/// Errors are stamped at the moment of conversion.
impl<V, E: Fault> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}
