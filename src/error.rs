use thiserror::Error;

/// Errors produced while looking up the current temperature
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when environment variable is not set (or is empty)
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// The request never got a response (DNS, connect, timeout)
    #[error("failed to make http request: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with something other than 200 OK
    #[error("weather API returned a non-OK status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Error reading the body of a successful response
    #[error("failed to read body: {0}")]
    Io(#[source] reqwest::Error),

    /// Wrapper for JSON deserialization errors
    #[error("failed to parse JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
