//! Errors raised while loading options.

/// Failure to fetch or decode the option list.
///
/// None of these reach the user: the option source logs them and keeps
/// whatever list it already had.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The body was not a JSON array of records with a `name.common` field.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
