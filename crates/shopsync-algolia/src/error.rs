use thiserror::Error;

/// Errors returned by the search index client.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The index API answered with a non-2xx status.
    #[error("index {index} rejected batch with HTTP {status}: {message}")]
    UnexpectedStatus {
        index: String,
        status: u16,
        message: String,
    },

    /// The configured base URL or index name does not form a valid URL.
    #[error("invalid index endpoint: {0}")]
    InvalidEndpoint(String),
}
