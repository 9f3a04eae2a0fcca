// ── Controller session ──
//
// One authenticated session against one controller. The session is an
// owned value: created by `connect`, borrowed by every fetch, and consumed
// by `close`. There is no global state.

use macfilter_api::{ControllerPlatform, LegacyClient};
use tracing::{debug, info, warn};

use crate::config::{PlatformHint, SessionConfig};
use crate::credentials::CredentialProvider;
use crate::error::CoreError;
use crate::model::{KnownDevice, Site, WlanProfile};

/// An authenticated controller session.
pub struct ControllerSession {
    client: LegacyClient,
}

impl ControllerSession {
    /// Resolve the platform (probing when the hint is `Auto`), then log in.
    ///
    /// Fails with `AuthenticationFailed` on rejected credentials,
    /// `ConnectionFailed` when the controller is unreachable, and
    /// `NetworkTimeout` when it does not answer in time.
    pub async fn connect(
        config: &SessionConfig,
        credentials: &dyn CredentialProvider,
    ) -> Result<Self, CoreError> {
        let transport = config.transport();

        let platform = match config.platform {
            PlatformHint::UnifiOs => ControllerPlatform::UnifiOs,
            PlatformHint::Classic => ControllerPlatform::ClassicController,
            PlatformHint::Auto => LegacyClient::detect_platform(&config.url, &transport).await?,
        };
        debug!(?platform, "controller platform");

        let client = LegacyClient::new(config.url.clone(), platform, &transport)?;
        let password = credentials.password(&config.username)?;
        client.login(&config.username, &password).await?;

        info!(url = %config.url, user = %config.username, "connected to controller");
        Ok(Self { client })
    }

    pub fn platform(&self) -> ControllerPlatform {
        self.client.platform()
    }

    /// All sites visible to the user, sorted by display name.
    pub async fn list_sites(&self) -> Result<Vec<Site>, CoreError> {
        let mut sites: Vec<Site> = self
            .client
            .list_sites()
            .await?
            .into_iter()
            .map(Site::from)
            .collect();
        sites.sort_by_cached_key(|s| s.display_name.to_lowercase());
        debug!(count = sites.len(), "fetched sites");
        Ok(sites)
    }

    /// WLAN profiles of a site (by internal code), sorted by name.
    pub async fn list_wlans(&self, site_code: &str) -> Result<Vec<WlanProfile>, CoreError> {
        let mut wlans: Vec<WlanProfile> = self
            .client
            .list_wlans(site_code)
            .await?
            .into_iter()
            .map(WlanProfile::from)
            .collect();
        wlans.sort_by_cached_key(|w| w.name.to_lowercase());
        debug!(site = site_code, count = wlans.len(), "fetched WLAN profiles");
        Ok(wlans)
    }

    /// The known-client catalogue of a site, minus records that cannot be
    /// used for labelling.
    pub async fn list_known_devices(&self, site_code: &str) -> Result<Vec<KnownDevice>, CoreError> {
        let users = self.client.list_known_clients(site_code).await?;
        let total = users.len();
        let devices: Vec<KnownDevice> = users.into_iter().filter_map(KnownDevice::from_legacy).collect();
        debug!(site = site_code, total, named = devices.len(), "fetched known clients");
        Ok(devices)
    }

    /// Log out. A failed logout is logged and otherwise ignored; the
    /// session is gone either way.
    pub async fn close(self) {
        if let Err(e) = self.client.logout().await {
            warn!(error = %e, "logout failed (non-fatal)");
        }
    }
}
