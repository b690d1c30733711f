use thiserror::Error as ThisError;

/// Errors that can occur while configuring or dumping a logger
#[derive(ThisError, Debug)]
pub enum Error {
    /// Writing to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A timestamp could not be rendered.
    #[error("Timestamp format error: {0}")]
    Format(#[from] time::error::Format),
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Initialization failed.
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::other("sink closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "IO error: sink closed");
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::Config("unknown format: xml".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown format: xml");
    }
}
