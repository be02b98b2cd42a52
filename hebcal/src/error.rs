// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while talking to a remote feed.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if it could be read.
        body: String,
    },

    /// The response body is not the JSON we expected.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The translation service reported a failure inside a 200 response.
    #[error("Translation service answered with status {0}")]
    Api(String),

    /// The request could not be built from the given parameters.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl From<jiff::Error> for FetchError {
    fn from(e: jiff::Error) -> Self {
        Self::InvalidQuery(e.to_string())
    }
}
