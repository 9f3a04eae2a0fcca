// Login, logout and platform detection.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::auth::ControllerPlatform;
use crate::error::Error;
use crate::legacy::client::{LegacyClient, under_base};
use crate::transport::TransportConfig;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

impl LegacyClient {
    /// Start a cookie session. Any non-2xx answer counts as rejected
    /// credentials.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.auth_url(self.platform().login_path())?;
        debug!(%url, username, "logging in");

        let body = LoginBody {
            username,
            password: password.expose_secret(),
        };
        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login rejected (HTTP {status}): {}", text.trim()),
            });
        }

        // UniFi OS wants the token back on later requests through its proxy.
        self.remember_csrf(resp.headers());
        Ok(())
    }

    /// End the session. The controller's answer is not inspected.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.auth_url(self.platform().logout_path())?;
        debug!(%url, "logging out");

        self.with_csrf(self.http.post(url))
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        Ok(())
    }

    /// One GET against the UniFi OS login path: consoles answer it (401,
    /// 405, ...), standalone controllers return 404.
    pub async fn detect_platform(
        base_url: &Url,
        transport: &TransportConfig,
    ) -> Result<ControllerPlatform, Error> {
        let http = transport.probe_client()?;
        let url = under_base(base_url, ControllerPlatform::UnifiOs.login_path())?;
        debug!(%url, "detecting controller platform");

        match http.get(url).send().await {
            Ok(resp) if resp.status() == StatusCode::NOT_FOUND => {
                Ok(ControllerPlatform::ClassicController)
            }
            Ok(_) => Ok(ControllerPlatform::UnifiOs),
            Err(e) if e.is_timeout() => Err(Error::Timeout {
                timeout_secs: transport.timeout.as_secs(),
            }),
            Err(e) => Err(Error::Transport(e)),
        }
    }
}
