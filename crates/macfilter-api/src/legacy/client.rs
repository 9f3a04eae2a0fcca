// Legacy API session client
//
// Owns the cookie-carrying HTTP client, builds platform-prefixed URLs and
// decodes the `{ meta, data }` envelope. Endpoint methods live in the
// sibling files.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::ControllerPlatform;
use crate::error::Error;
use crate::legacy::models::LegacyResponse;
use crate::transport::TransportConfig;

const CSRF_HEADER: &str = "X-CSRF-Token";
const CSRF_ROTATED_HEADER: &str = "X-Updated-CSRF-Token";

/// Where an endpoint lives: controller-wide, or under `/api/s/{site}`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scope<'a> {
    Controller,
    Site(&'a str),
}

/// One cookie session against one controller.
pub struct LegacyClient {
    pub(super) http: reqwest::Client,
    base_url: Url,
    platform: ControllerPlatform,
    timeout: Duration,
    /// UniFi OS only; sent back on every request once seen.
    csrf_token: Mutex<Option<String>>,
}

impl LegacyClient {
    /// `base_url` is the controller root, e.g. `https://192.168.1.1` or
    /// `https://unifi.lan:8443`.
    pub fn new(
        base_url: Url,
        platform: ControllerPlatform,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: transport.session_client()?,
            base_url,
            platform,
            timeout: transport.timeout,
            csrf_token: Mutex::new(None),
        })
    }

    pub fn platform(&self) -> ControllerPlatform {
        self.platform
    }

    // ── CSRF ─────────────────────────────────────────────────────────

    fn csrf(&self) -> MutexGuard<'_, Option<String>> {
        self.csrf_token.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Keep the newest token the controller handed out, if any.
    pub(super) fn remember_csrf(&self, headers: &HeaderMap) {
        let token = headers
            .get(CSRF_ROTATED_HEADER)
            .or_else(|| headers.get(CSRF_HEADER))
            .and_then(|v| v.to_str().ok());
        if let Some(token) = token {
            trace!("CSRF token updated");
            *self.csrf() = Some(token.to_owned());
        }
    }

    pub(super) fn with_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        match self.csrf().as_deref() {
            Some(token) => request.header(CSRF_HEADER, token),
            None => request,
        }
    }

    // ── URLs ─────────────────────────────────────────────────────────

    /// Login/logout paths sit under the base URL but are never prefixed.
    pub(super) fn auth_url(&self, path: &str) -> Result<Url, Error> {
        under_base(&self.base_url, path)
    }

    /// `{base}{prefix}/api/{path}` or `{base}{prefix}/api/s/{site}/{path}`.
    pub(crate) fn endpoint(&self, scope: Scope<'_>, path: &str) -> Result<Url, Error> {
        let prefix = self.platform.legacy_prefix();
        let suffix = match scope {
            Scope::Controller => format!("{prefix}/api/{path}"),
            Scope::Site(site) => format!("{prefix}/api/s/{site}/{path}"),
        };
        under_base(&self.base_url, &suffix)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Timeouts carry the configured limit; everything else stays a
    /// transport error.
    pub(super) fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }

    /// GET an endpoint and return its `data` array.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!(%url, "GET");
        let resp = self
            .with_csrf(self.http.get(url))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        self.remember_csrf(resp.headers());
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.classify(e))?;
        decode(status, &body)
    }
}

/// UniFi OS reports some failures as `{"error": {"code": N, "message": ".."}}`
/// with HTTP 200.
#[derive(Deserialize)]
struct ProxyError {
    error: Option<ProxyErrorBody>,
}

#[derive(Deserialize)]
struct ProxyErrorBody {
    code: u16,
    message: Option<String>,
}

/// Turn a legacy response into its `data` payload.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Vec<T>, Error> {
    match status {
        StatusCode::UNAUTHORIZED => {
            return Err(Error::Authentication {
                message: "session expired or invalid credentials".into(),
            });
        }
        StatusCode::FORBIDDEN => {
            return Err(Error::Controller {
                message: "insufficient permissions (HTTP 403)".into(),
            });
        }
        s if !s.is_success() => {
            return Err(Error::Controller {
                message: format!("HTTP {s}: {}", preview(body)),
            });
        }
        _ => {}
    }

    if let Ok(ProxyError { error: Some(err) }) = serde_json::from_str::<ProxyError>(body) {
        let message = err.message.unwrap_or_default();
        return Err(if err.code == 401 {
            Error::Authentication { message }
        } else {
            Error::Controller {
                message: format!("UniFi OS error {}: {message}", err.code),
            }
        });
    }

    let envelope: LegacyResponse<T> = serde_json::from_str(body).map_err(|e| Error::Decode {
        message: format!("{e} (body starts {:?})", preview(body)),
    })?;

    if envelope.meta.rc == "ok" {
        Ok(envelope.data)
    } else {
        Err(Error::Controller {
            message: envelope
                .meta
                .msg
                .unwrap_or_else(|| format!("rc={}", envelope.meta.rc)),
        })
    }
}

/// At most 200 bytes, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Append an absolute `path` to `base`, keeping any path `base` already has
/// (`https://host/unifi` + `/api/login` is `https://host/unifi/api/login`).
pub(super) fn under_base(base: &Url, path: &str) -> Result<Url, Error> {
    let base = base.as_str().trim_end_matches('/');
    Ok(Url::parse(&format!("{base}{path}"))?)
}
