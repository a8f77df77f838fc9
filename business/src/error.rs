//! User-facing error shaping for page fetches.

use thiserror::Error;

/// What went wrong with a page fetch.
///
/// The `Display` of each variant is the exact string shown in the error
/// banner, so all message wording lives here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-layer failure: the server never answered.
    #[error(
        "Failed to fetch data. Please check if the server is running and CORS policy allows access."
    )]
    Unreachable,

    /// The response body was not a `{"data": [...]}` object. Carries the raw
    /// payload so the user can see what actually came back.
    #[error("Data is not in the expected format. Received: {payload}")]
    Format { payload: String },

    /// Any other failure, passed through verbatim.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Wrap a transport-layer failure ("Network Error" and friends).
    ///
    /// The raw driver message is only logged; the user always gets the fixed
    /// reachability/CORS message, which is more actionable than whatever the
    /// HTTP stack produced.
    pub fn transport(message: impl std::fmt::Display) -> Self {
        log::warn!("transport error: {message}");
        Self::Unreachable
    }

    /// Wrap a malformed response body.
    pub fn format(payload: impl Into<String>) -> Self {
        Self::Format {
            payload: payload.into(),
        }
    }

    /// Wrap a non-success HTTP status.
    pub fn status(status: u16) -> Self {
        Self::Other(format!("API returned status: {status}"))
    }
}
