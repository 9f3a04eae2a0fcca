// ── Runtime connection configuration ──
//
// These types describe *how* to reach a controller. They never touch disk:
// the front-end builds a `SessionConfig` from flags, environment and its
// own config file, then hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs). Default for local controllers.
    #[default]
    DangerAcceptInvalid,
}

/// Which controller flavour to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlatformHint {
    /// Probe the controller before logging in.
    #[default]
    Auto,
    /// UniFi OS console (`/proxy/network` prefix, `/api/auth/login`).
    UnifiOs,
    /// Standalone Network Application (`/api/login`).
    Classic,
}

/// Configuration for one session against one controller.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Controller base URL (e.g. `https://192.168.1.1:8443`).
    pub url: Url,
    /// Login name.
    pub username: String,
    pub tls: TlsVerification,
    /// Per-request limit; a request exceeding it fails the run.
    pub timeout: Duration,
    pub platform: PlatformHint,
}

impl SessionConfig {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(url: Url, username: impl Into<String>) -> Self {
        Self {
            url,
            username: username.into(),
            tls: TlsVerification::default(),
            timeout: Self::DEFAULT_TIMEOUT,
            platform: PlatformHint::default(),
        }
    }

    pub(crate) fn transport(&self) -> macfilter_api::TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => macfilter_api::TlsMode::System,
            TlsVerification::CustomCa(path) => macfilter_api::TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => macfilter_api::TlsMode::DangerAcceptInvalid,
        };
        macfilter_api::TransportConfig::new(tls, self.timeout)
    }
}
