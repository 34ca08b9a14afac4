//! Error types for skinpro-rest.

/// Result type alias for skinpro-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for skinpro-rest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the underlying HTTP client.
    #[error(transparent)]
    Client(#[from] skinpro_client::Error),

    /// A record id that would produce a malformed path segment.
    #[error("invalid id: {0:?}")]
    InvalidId(String),
}

impl Error {
    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Client(err) => err.status(),
            Error::InvalidId(_) => None,
        }
    }

    /// Returns true if this wraps a terminal "service unavailable" error.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Error::Client(err) if err.is_service_unavailable())
    }
}
