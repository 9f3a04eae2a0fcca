// Legacy API WLAN configuration endpoints

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::{LegacyClient, Scope};
use crate::legacy::models::LegacyWlan;

impl LegacyClient {
    /// List WLAN profiles for a site, including their MAC filter lists.
    ///
    /// `GET /api/s/{site}/rest/wlanconf`
    pub async fn list_wlans(&self, site: &str) -> Result<Vec<LegacyWlan>, Error> {
        let url = self.endpoint(Scope::Site(site), "rest/wlanconf")?;
        debug!(site, "listing WLAN profiles");
        self.fetch(url).await
    }
}
