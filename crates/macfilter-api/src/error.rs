use thiserror::Error;

/// Errors from talking to the controller.
///
/// `macfilter-core` folds these into its domain error; nothing here is
/// shown to users directly.
#[derive(Debug, Error)]
pub enum Error {
    /// Login was refused, or the session cookie stopped being accepted.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Connection refused, DNS failure, reset, ...
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No answer within the configured per-request limit.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Certificate loading or client construction failed.
    #[error("TLS error: {message}")]
    Tls { message: String },

    /// The controller answered, but with `meta.rc != "ok"`, a non-2xx
    /// status, or a UniFi OS error object.
    #[error("Controller error: {message}")]
    Controller { message: String },

    /// The body was not the JSON shape we expected.
    #[error("Unexpected response: {message}")]
    Decode { message: String },
}
