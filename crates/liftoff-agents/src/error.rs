// error.rs — Internal error type for the data-fetching agents.
//
// These errors never cross the TaskHandler boundary: each agent's
// `execute` converts them into a failure ResultRecord with the error's
// Display text as the message.

use thiserror::Error;

/// What can go wrong inside an agent's fetch path.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The HTTP request failed (connect, timeout, or non-success status).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream responded, but not with the shape we expect.
    #[error("unexpected response shape: {0}")]
    Malformed(String),
}
