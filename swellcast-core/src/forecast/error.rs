use thiserror::Error;

/// Errors from [`crate::forecast::ForecastProvider::fetch_forecast`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    /// The upstream request exceeded its deadline.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The upstream service answered with a non-success status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request never reached the upstream service.
    #[error("network error requesting {url}: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The upstream payload could not be decoded.
    #[error("failed to parse forecast response: {message}")]
    ParseError {
        /// Error detail.
        message: String,
    },
    /// The provider returned no usable hours.
    #[error("forecast contained no hourly samples")]
    EmptySeries,
}
