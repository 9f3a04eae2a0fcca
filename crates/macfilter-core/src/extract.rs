// ── Filter list extraction ──

use tracing::warn;

use crate::error::CoreError;
use crate::model::{MacAddress, WlanProfile};
use crate::resolve::same_name;

/// Normalized filter list of one WLAN, plus the raw values that could not
/// be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub macs: Vec<MacAddress>,
    pub skipped: Vec<String>,
}

impl Extraction {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Find a WLAN profile by exact, case-insensitive name. Surrounding
/// whitespace in `name` is ignored, as for sites.
pub fn find_wlan<'a>(wlans: &'a [WlanProfile], name: &str) -> Result<&'a WlanProfile, CoreError> {
    let wanted = name.trim();
    wlans
        .iter()
        .find(|w| same_name(&w.name, wanted))
        .ok_or_else(|| CoreError::WlanNotFound {
            name: name.to_owned(),
            available: wlans.iter().map(|w| w.name.clone()).collect(),
        })
}

/// Locate `wlan_name` and normalize its MAC filter list.
///
/// Unparseable values are logged, skipped, and reported in
/// [`Extraction::skipped`]; they never fail the call. An empty list is a
/// valid result.
pub fn extract(wlans: &[WlanProfile], wlan_name: &str) -> Result<Extraction, CoreError> {
    let wlan = find_wlan(wlans, wlan_name)?;

    let mut extraction = Extraction::default();
    for raw in &wlan.mac_filter_list {
        match MacAddress::parse(raw) {
            Ok(mac) => extraction.macs.push(mac),
            Err(err) => {
                warn!(wlan = %wlan.name, %err, "skipping filter entry");
                extraction.skipped.push(raw.clone());
            }
        }
    }
    Ok(extraction)
}
