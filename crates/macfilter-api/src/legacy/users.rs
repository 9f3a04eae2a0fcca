// Legacy API known-client endpoints
//
// `stat/alluser` returns every client the controller has ever seen, which is
// the catalogue used to put names on MAC filter entries.

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::{LegacyClient, Scope};
use crate::legacy::models::LegacyUser;

impl LegacyClient {
    /// List all known (historical) clients for a site.
    ///
    /// `GET /api/s/{site}/stat/alluser`
    pub async fn list_known_clients(&self, site: &str) -> Result<Vec<LegacyUser>, Error> {
        let url = self.endpoint(Scope::Site(site), "stat/alluser")?;
        debug!(site, "listing known clients");
        self.fetch(url).await
    }
}
