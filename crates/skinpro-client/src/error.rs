//! Error types for skinpro-client.

/// Result type alias for skinpro-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for skinpro-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error is a transient network failure eligible
    /// for retry with backoff.
    pub fn is_transient(&self) -> bool {
        self.kind.is_transient()
    }

    /// Returns true if this is a terminal "service unavailable" error
    /// (availability probe against the request origin failed).
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self.kind, ErrorKind::ServiceUnavailable { .. })
    }

    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// HTTP error response (non-2xx). Terminal; the response body is kept
    /// for diagnostics.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Request or response timed out. Transient.
    #[error("request timeout")]
    Timeout,

    /// Could not establish a connection to the server. Transient, but
    /// triggers an availability probe before any retry.
    #[error("connection error: {0}")]
    Connection(String),

    /// The connection dropped mid-request (reset, closed before a response
    /// arrived). Transient.
    #[error("network error: {0}")]
    Network(String),

    /// The availability probe against the request origin failed. Terminal.
    #[error("service unavailable: {origin}")]
    ServiceUnavailable { origin: String },

    /// All retries for a URL were used up. Terminal; wraps the last
    /// underlying failure as the error source.
    #[error("all {attempts} retry attempts exhausted for {url}")]
    RetriesExhausted { url: String, attempts: u32 },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Multipart form construction error (e.g. malformed content type).
    #[error("multipart error: {0}")]
    Multipart(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl ErrorKind {
    /// Returns true if this error kind is a transient network failure.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout | ErrorKind::Connection(_) | ErrorKind::Network(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else if err.is_request() || err.is_body() {
            // No response arrived at all; the connection went away under us.
            ErrorKind::Network(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}
