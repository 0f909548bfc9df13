use thiserror::Error;

/// Errors returned by the Billboard chart client.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The chart page does not exist (HTTP 404), e.g. a future date.
    #[error("chart not found: {url}")]
    NotFound { url: String },

    /// Any other non-2xx response from the chart source.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The page was fetched but no chart rows could be extracted.
    #[error("malformed chart page from {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The configured base URL cannot be parsed.
    #[error("invalid chart base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
