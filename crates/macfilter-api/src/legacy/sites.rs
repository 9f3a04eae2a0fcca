// Sites
//
// The one controller-wide endpoint this tool needs; everything else is
// scoped under `/api/s/{site}`.

use tracing::debug;

use crate::error::Error;
use crate::legacy::client::{LegacyClient, Scope};
use crate::legacy::models::LegacySite;

impl LegacyClient {
    /// `GET /api/self/sites`: every site the logged-in user can see.
    pub async fn list_sites(&self) -> Result<Vec<LegacySite>, Error> {
        let url = self.endpoint(Scope::Controller, "self/sites")?;
        let sites: Vec<LegacySite> = self.fetch(url).await?;
        debug!(count = sites.len(), "sites listed");
        Ok(sites)
    }
}
