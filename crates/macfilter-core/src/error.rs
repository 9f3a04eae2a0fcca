// ── Core error types ──
//
// User-facing errors from macfilter-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<macfilter_api::Error>`
// impl translates transport-layer errors into domain variants.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Session errors ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("No password available for '{username}'")]
    NoCredentials { username: String },

    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Controller did not answer within {timeout_secs}s")]
    NetworkTimeout { timeout_secs: u64 },

    // ── Resolution errors ────────────────────────────────────────────
    #[error("Site '{query}' not found")]
    SiteNotFound {
        query: String,
        /// Display names of the sites that do exist.
        available: Vec<String>,
    },

    #[error("WLAN '{name}' not found")]
    WlanNotFound {
        name: String,
        /// Names of the WLAN profiles that do exist.
        available: Vec<String>,
    },

    /// A filter list value that is not six hex octets. Recovered locally
    /// by the extractor; only surfaces as an error from direct parsing.
    #[error("Malformed MAC address: {raw:?}")]
    MalformedMac { raw: String },

    // ── Export errors ────────────────────────────────────────────────
    #[error("Unsupported export format '{format}' (expected txt, csv or xlsx)")]
    UnsupportedFormat { format: String },

    #[error("{capability} support is not available in this build")]
    CapabilityUnavailable { capability: String },

    #[error("Cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The encoder rejected the data (not a filesystem failure).
    #[error("Cannot encode {format} export: {message}")]
    Export { format: &'static str, message: String },

    // ── Controller / configuration ───────────────────────────────────
    #[error("Controller API error: {message}")]
    Api { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<macfilter_api::Error> for CoreError {
    fn from(err: macfilter_api::Error) -> Self {
        match err {
            macfilter_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            macfilter_api::Error::Timeout { timeout_secs } => {
                CoreError::NetworkTimeout { timeout_secs }
            }
            macfilter_api::Error::Transport(ref e) => {
                let url = e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string);
                if e.is_timeout() {
                    CoreError::NetworkTimeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url,
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                    }
                }
            }
            macfilter_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            macfilter_api::Error::Tls { message } => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {message}"),
            },
            macfilter_api::Error::Controller { message } => CoreError::Api { message },
            macfilter_api::Error::Decode { message } => CoreError::Api {
                message: format!("unexpected response: {message}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_auth_failure_maps_to_authentication_failed() {
        let err = CoreError::from(macfilter_api::Error::Authentication {
            message: "bad password".into(),
        });
        assert!(matches!(err, CoreError::AuthenticationFailed { ref message } if message == "bad password"));
    }

    #[test]
    fn api_timeout_keeps_limit() {
        let err = CoreError::from(macfilter_api::Error::Timeout { timeout_secs: 10 });
        assert!(matches!(err, CoreError::NetworkTimeout { timeout_secs: 10 }));
        assert_eq!(err.to_string(), "Controller did not answer within 10s");
    }

    #[test]
    fn encoding_failures_do_not_blame_the_controller() {
        let err = CoreError::Export {
            format: "CSV",
            message: "unequal lengths".into(),
        };
        assert_eq!(err.to_string(), "Cannot encode CSV export: unequal lengths");
    }
}
