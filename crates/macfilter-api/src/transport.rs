// HTTP client construction
//
// The platform probe and the session client are built from the same
// settings; only the session client keeps cookies.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::Error;

/// How the controller's certificate is checked.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// System trust store.
    System,
    /// Trust the CA certificate in this PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate. Most controllers ship self-signed.
    DangerAcceptInvalid,
}

#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    /// Applied to every request, connect included.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::DangerAcceptInvalid,
            timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    pub fn new(tls: TlsMode, timeout: Duration) -> Self {
        Self { tls, timeout }
    }

    /// Cookie-less client for one-off requests.
    pub fn probe_client(&self) -> Result<Client, Error> {
        finish(self.builder()?)
    }

    /// Client with a cookie store; the login cookie rides along on every
    /// later request.
    pub fn session_client(&self) -> Result<Client, Error> {
        finish(self.builder()?.cookie_store(true))
    }

    fn builder(&self) -> Result<ClientBuilder, Error> {
        let builder = Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("macfilter/", env!("CARGO_PKG_VERSION")));

        Ok(match &self.tls {
            TlsMode::System => builder,
            TlsMode::DangerAcceptInvalid => builder.danger_accept_invalid_certs(true),
            TlsMode::CustomCa(path) => {
                let pem = std::fs::read(path).map_err(|e| Error::Tls {
                    message: format!("cannot read {}: {e}", path.display()),
                })?;
                let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| Error::Tls {
                    message: format!("{} is not a PEM certificate: {e}", path.display()),
                })?;
                builder.add_root_certificate(cert)
            }
        })
    }
}

fn finish(builder: ClientBuilder) -> Result<Client, Error> {
    builder.build().map_err(|e| Error::Tls {
        message: format!("cannot build HTTP client: {e}"),
    })
}
