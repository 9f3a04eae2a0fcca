//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with help text and a
//! process exit code.

use miette::Diagnostic;
use thiserror::Error;

use macfilter_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const UNAVAILABLE: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(macfilter::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             For self-signed certificates leave --verify-ssl off or pass --ca-cert."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(macfilter::timeout),
        help("Increase the limit with --timeout or check controller responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(macfilter::auth_failed),
        help("{message}\nVerify --user and --password, or the credentials stored for the profile.")
    )]
    AuthFailed { message: String },

    #[error("No password available for '{username}'")]
    #[diagnostic(
        code(macfilter::no_credentials),
        help(
            "Pass --password, set MACFILTER_PASSWORD, or store one in the system keyring\n\
             (service 'macfilter', entry '{profile}/password')."
        )
    )]
    NoCredentials { username: String, profile: String },

    // ── Resolution ───────────────────────────────────────────────────
    #[error("{kind} '{identifier}' not found")]
    #[diagnostic(code(macfilter::not_found), help("Available: {available}"))]
    NotFound {
        kind: &'static str,
        identifier: String,
        available: String,
    },

    // ── Export ───────────────────────────────────────────────────────
    #[error("{capability} export is not available in this build")]
    #[diagnostic(
        code(macfilter::unavailable),
        help("Rebuild with the `xlsx` feature, or export to txt or csv instead.")
    )]
    Unavailable { capability: String },

    #[error("Could not encode the {format} export")]
    #[diagnostic(code(macfilter::export), help("{message}"))]
    Export { format: &'static str, message: String },

    #[error("Cannot write {path}")]
    #[diagnostic(code(macfilter::io), help("Check that the directory exists and is writable."))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Controller error: {message}")]
    #[diagnostic(code(macfilter::api_error))]
    Api { message: String },

    // ── Usage / validation ───────────────────────────────────────────
    #[error("Missing required arguments: {flags}")]
    #[diagnostic(
        code(macfilter::missing_arguments),
        help("Pass them on the command line, via MACFILTER_* variables, or in a profile.")
    )]
    MissingArguments { flags: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(macfilter::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(macfilter::profile_not_found),
        help("Available profiles: {available}\nConfig file: {path}")
    )]
    ProfileNotFound {
        name: String,
        available: String,
        path: String,
    },

    #[error(transparent)]
    #[diagnostic(code(macfilter::config))]
    Config(Box<figment::Error>),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Unavailable { .. } => exit_code::UNAVAILABLE,
            Self::MissingArguments { .. }
            | Self::Validation { .. }
            | Self::ProfileNotFound { .. } => exit_code::USAGE,
            Self::Write { .. }
            | Self::Export { .. }
            | Self::Api { .. }
            | Self::Config(_)
            | Self::Io(_) => exit_code::GENERAL,
        }
    }

    /// Attach the active profile name to credential errors.
    pub fn with_profile(self, name: &str) -> Self {
        match self {
            Self::NoCredentials { username, .. } => Self::NoCredentials {
                username,
                profile: name.to_owned(),
            },
            other => other,
        }
    }
}

fn join_available(available: &[String]) -> String {
    if available.is_empty() {
        "(none)".into()
    } else {
        available.join(", ")
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::NoCredentials { username } => CliError::NoCredentials {
                username,
                profile: "default".into(),
            },

            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::NetworkTimeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::SiteNotFound { query, available } => CliError::NotFound {
                kind: "Site",
                identifier: query,
                available: join_available(&available),
            },

            CoreError::WlanNotFound { name, available } => CliError::NotFound {
                kind: "WLAN",
                identifier: name,
                available: join_available(&available),
            },

            CoreError::MalformedMac { raw } => CliError::Validation {
                field: "MAC address".into(),
                reason: format!("{raw:?} is not six hex octets"),
            },

            CoreError::UnsupportedFormat { format } => CliError::Validation {
                field: "format".into(),
                reason: format!("'{format}' (expected txt, csv or xlsx)"),
            },

            CoreError::CapabilityUnavailable { capability } => {
                CliError::Unavailable { capability }
            }

            CoreError::Io { path, source } => CliError::Write {
                path: path.display().to_string(),
                source,
            },

            CoreError::Export { format, message } => CliError::Export { format, message },

            CoreError::Api { message } => CliError::Api { message },

            CoreError::Config { message } => CliError::Validation {
                field: "configuration".into(),
                reason: message,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let cases = [
            (
                CoreError::AuthenticationFailed {
                    message: "bad".into(),
                },
                exit_code::AUTH,
            ),
            (
                CoreError::NoCredentials {
                    username: "admin".into(),
                },
                exit_code::AUTH,
            ),
            (
                CoreError::SiteNotFound {
                    query: "x".into(),
                    available: vec![],
                },
                exit_code::NOT_FOUND,
            ),
            (
                CoreError::WlanNotFound {
                    name: "x".into(),
                    available: vec!["Corp".into()],
                },
                exit_code::NOT_FOUND,
            ),
            (
                CoreError::CapabilityUnavailable {
                    capability: "xlsx".into(),
                },
                exit_code::UNAVAILABLE,
            ),
            (
                CoreError::UnsupportedFormat {
                    format: "pdf".into(),
                },
                exit_code::USAGE,
            ),
            (
                CoreError::ConnectionFailed {
                    url: "https://x".into(),
                    reason: "refused".into(),
                },
                exit_code::CONNECTION,
            ),
            (CoreError::NetworkTimeout { timeout_secs: 10 }, exit_code::TIMEOUT),
            (
                CoreError::Api {
                    message: "rc=error".into(),
                },
                exit_code::GENERAL,
            ),
            (
                CoreError::Export {
                    format: "XLSX",
                    message: "bad sheet".into(),
                },
                exit_code::GENERAL,
            ),
        ];

        for (core, code) in cases {
            let label = core.to_string();
            assert_eq!(CliError::from(core).exit_code(), code, "{label}");
        }
    }

    #[test]
    fn not_found_lists_alternatives() {
        let err = CliError::from(CoreError::WlanNotFound {
            name: "Gue".into(),
            available: vec!["Corp".into(), "Guest".into()],
        });
        assert_eq!(err.to_string(), "WLAN 'Gue' not found");
        let help = err.help().unwrap().to_string();
        assert_eq!(help, "Available: Corp, Guest");
    }
}
