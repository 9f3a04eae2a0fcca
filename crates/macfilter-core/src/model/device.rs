// ── Known client catalogue entry ──

use macfilter_api::LegacyUser;
use tracing::debug;

use super::mac::MacAddress;

/// A client the controller has seen, reduced to what labelling needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownDevice {
    pub mac: MacAddress,
    pub name: String,
}

impl KnownDevice {
    pub fn new(mac: MacAddress, name: impl Into<String>) -> Self {
        Self {
            mac,
            name: name.into(),
        }
    }

    /// Build a catalogue entry from a `stat/alluser` record.
    ///
    /// The name is the first non-blank of `name`, `hostname`,
    /// `usergroup_name`, `oui`. Records without a usable name or with an
    /// unparseable MAC are dropped.
    pub fn from_legacy(user: LegacyUser) -> Option<Self> {
        let raw_mac = user.mac.as_deref()?;
        let mac = match MacAddress::parse(raw_mac) {
            Ok(mac) => mac,
            Err(_) => {
                debug!(mac = raw_mac, "skipping catalogue entry with unparseable MAC");
                return None;
            }
        };

        let name = [user.name, user.hostname, user.usergroup_name, user.oui]
            .into_iter()
            .flatten()
            .map(|candidate| candidate.trim().to_owned())
            .find(|candidate| !candidate.is_empty())?;

        Some(Self { mac, name })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(value: serde_json::Value) -> LegacyUser {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn prefers_alias_over_hostname() {
        let device = KnownDevice::from_legacy(user(serde_json::json!({
            "mac": "AA:BB:CC:DD:EE:FF", "name": " Phone ", "hostname": "android-1234"
        })))
        .unwrap();
        assert_eq!(device.mac.as_str(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(device.name, "Phone");
    }

    #[test]
    fn falls_through_blank_fields_to_oui() {
        let device = KnownDevice::from_legacy(user(serde_json::json!({
            "mac": "11:22:33:44:55:66", "name": "", "hostname": "   ", "oui": "Espressif"
        })))
        .unwrap();
        assert_eq!(device.name, "Espressif");
    }

    #[test]
    fn drops_records_without_mac_or_name() {
        assert!(KnownDevice::from_legacy(user(serde_json::json!({ "name": "ghost" }))).is_none());
        assert!(
            KnownDevice::from_legacy(user(serde_json::json!({ "mac": "11:22:33:44:55:66" })))
                .is_none()
        );
        assert!(
            KnownDevice::from_legacy(user(serde_json::json!({ "mac": "zz", "name": "x" })))
                .is_none()
        );
    }
}
