// ── Pipeline ──
//
// Site -> WLAN -> filter list -> names. `build_report` is the pure half,
// `fetch_report` drives it from a live session.

use serde::Serialize;
use tracing::info;

use crate::error::CoreError;
use crate::extract::{extract, find_wlan};
use crate::model::{KnownDevice, MacEntry, Site, WlanProfile};
use crate::names::NameIndex;
use crate::resolve::resolve_site;
use crate::session::ControllerSession;

/// Labelled MAC filter list of one WLAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacFilterReport {
    pub site: Site,
    /// WLAN name as the controller spells it.
    pub wlan: String,
    pub entries: Vec<MacEntry>,
    /// Raw filter values that were not valid MACs.
    pub skipped: Vec<String>,
}

impl MacFilterReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Entries whose MAC matched a known client.
    pub fn named_count(&self) -> usize {
        self.entries.iter().filter(|e| e.label.is_known()).count()
    }
}

/// Assemble a report from already-fetched WLANs and catalogue.
pub fn build_report(
    site: Site,
    wlans: &[WlanProfile],
    devices: Vec<KnownDevice>,
    wlan_name: &str,
) -> Result<MacFilterReport, CoreError> {
    let wlan = find_wlan(wlans, wlan_name)?.name.clone();
    let extraction = extract(wlans, wlan_name)?;

    let index = NameIndex::build(devices);
    let entries = index.label(extraction.macs);

    Ok(MacFilterReport {
        site,
        wlan,
        entries,
        skipped: extraction.skipped,
    })
}

/// Run the full pipeline against a live session.
///
/// The site and WLAN are resolved before the catalogue is fetched, so a
/// typo fails fast without downloading every known client.
pub async fn fetch_report(
    session: &ControllerSession,
    site_query: &str,
    wlan_name: &str,
) -> Result<MacFilterReport, CoreError> {
    let sites = session.list_sites().await?;
    let site = resolve_site(&sites, site_query)?.clone();
    info!(site = %site.display_name, code = %site.code, "resolved site");

    let wlans = session.list_wlans(&site.code).await?;
    find_wlan(&wlans, wlan_name)?;

    let devices = session.list_known_devices(&site.code).await?;
    let report = build_report(site, &wlans, devices, wlan_name)?;

    info!(
        wlan = %report.wlan,
        entries = report.entries.len(),
        named = report.named_count(),
        skipped = report.skipped_count(),
        "MAC filter list loaded"
    );
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Label, MacAddress};

    fn mac(raw: &str) -> MacAddress {
        MacAddress::parse(raw).unwrap()
    }

    #[test]
    fn labels_filter_list_from_catalogue() {
        let wlans = vec![WlanProfile::new(
            "Guest",
            vec!["AA-BB-CC-DD-EE-FF".into(), "11:22:33:44:55:66".into()],
        )];
        let devices = vec![KnownDevice::new(mac("aa:bb:cc:dd:ee:ff"), "Phone")];

        let report = build_report(Site::new("Default", "default"), &wlans, devices, "guest").unwrap();

        assert_eq!(report.wlan, "Guest");
        assert_eq!(
            report.entries,
            vec![
                MacEntry::new(mac("aa:bb:cc:dd:ee:ff"), Label::Known("Phone".into())),
                MacEntry::new(mac("11:22:33:44:55:66"), Label::Unknown),
            ]
        );
        assert_eq!(report.named_count(), 1);
        assert_eq!(report.skipped_count(), 0);
    }

    #[test]
    fn malformed_values_do_not_stop_the_run() {
        let wlans = vec![WlanProfile::new(
            "Guest",
            vec!["not-a-mac".into(), "11:22:33:44:55:66".into()],
        )];

        let report = build_report(Site::new("Default", "default"), &wlans, vec![], "Guest").unwrap();

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.skipped, vec!["not-a-mac".to_owned()]);
    }

    #[test]
    fn unknown_wlan_fails_before_labelling() {
        let err = build_report(Site::new("Default", "default"), &[], vec![], "Guest").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"WLAN 'Guest' not found");
    }

    #[test]
    fn serializes_for_machine_output() {
        let wlans = vec![WlanProfile::new("IoT", vec!["aabb.ccdd.eeff".into()])];
        let report = build_report(Site::new("Lab", "lab"), &wlans, vec![], "IoT").unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "site": { "display_name": "Lab", "code": "lab" },
                "wlan": "IoT",
                "entries": [{ "mac": "aa:bb:cc:dd:ee:ff", "name": "Unknown" }],
                "skipped": []
            })
        );
    }
}
