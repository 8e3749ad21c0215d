use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// An empty result set is not an error: fetches return an empty record list
/// and no summary instead.
#[derive(Debug, Error)]
pub enum InsiderError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The input is not a plausible six-digit security code.
    #[error("invalid security code: {code:?}")]
    InvalidCode {
        /// The rejected input.
        code: String,
    },

    /// The code is well formed but its prefix maps to no supported market.
    #[error("no market mapping for security code {code}")]
    UnknownMarket {
        /// The code whose prefix is unmapped.
        code: String,
    },

    /// A user-supplied date bound did not parse, or the resolved window is inverted.
    #[error("invalid date range: {input:?} (expected {expected})")]
    InvalidDateRange {
        /// The offending input (or the resolved window when inverted).
        input: String,
        /// A human-readable description of what was expected.
        expected: String,
    },

    /// The exchange signalled that it is overloaded.
    #[error("system busy: status {status} at {url}")]
    TransportBusy {
        /// The HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
        /// The headers sent with the request, for diagnostics.
        headers: Vec<(String, String)>,
    },

    /// Any other unsuccessful response.
    #[error("request failed: status {status} at {url}")]
    TransportFailure {
        /// The HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
        /// The raw response body.
        body: String,
    },

    /// The data received from the exchange was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
