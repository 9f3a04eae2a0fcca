// ── WLAN profile domain type ──

use macfilter_api::LegacyWlan;
use serde::Serialize;

/// What the controller does with MACs on the filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FilterPolicy {
    /// Only listed MACs may associate.
    Allow,
    /// Listed MACs are refused.
    Deny,
    /// Policy not reported by the controller.
    Unset,
}

impl FilterPolicy {
    fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("allow") => Self::Allow,
            Some("deny") => Self::Deny,
            _ => Self::Unset,
        }
    }
}

/// A WLAN profile and its raw (not yet normalized) MAC filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WlanProfile {
    pub name: String,
    pub enabled: bool,
    pub mac_filter_enabled: bool,
    pub mac_filter_policy: FilterPolicy,
    pub mac_filter_list: Vec<String>,
}

impl WlanProfile {
    pub fn new(name: impl Into<String>, mac_filter_list: Vec<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            mac_filter_enabled: !mac_filter_list.is_empty(),
            mac_filter_policy: FilterPolicy::Unset,
            mac_filter_list,
        }
    }
}

impl From<LegacyWlan> for WlanProfile {
    fn from(wlan: LegacyWlan) -> Self {
        Self {
            name: wlan.name,
            enabled: wlan.enabled.unwrap_or(true),
            mac_filter_enabled: wlan.mac_filter_enabled.unwrap_or(false),
            mac_filter_policy: FilterPolicy::from_raw(wlan.mac_filter_policy.as_deref()),
            mac_filter_list: wlan.mac_filter_list.unwrap_or_default(),
        }
    }
}
