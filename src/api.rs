use thiserror::Error as ThisError;

/// Known failures of a remote API call.
///
/// A closed set: every variant is a message-only singleton.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiError {
    /// The call was made without valid credentials.
    #[error("Not authorized")]
    NotAuthorized,
    /// No network is available.
    #[error("Not connected")]
    Network,
    /// Anything that could not be classified.
    #[error("Unknown exception")]
    Unknown,
}

impl ApiError {
    /// Every variant, in declaration order.
    pub const ALL: [ApiError; 3] = [ApiError::NotAuthorized, ApiError::Network, ApiError::Unknown];
}
