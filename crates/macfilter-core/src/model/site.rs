// ── Site domain type ──

use macfilter_api::LegacySite;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    /// Human-friendly label (the controller's `desc`).
    pub display_name: String,
    /// Internal reference used in legacy API paths (`/api/s/{code}/...`).
    pub code: String,
}

impl Site {
    pub fn new(display_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            code: code.into(),
        }
    }
}

impl From<LegacySite> for Site {
    fn from(site: LegacySite) -> Self {
        let display_name = site
            .desc
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| site.name.clone());
        Self {
            display_name,
            code: site.name,
        }
    }
}
