// Legacy API response types
//
// Models for the legacy JSON payloads this tool reads. All responses are
// wrapped in the `LegacyResponse<T>` envelope. Fields use `#[serde(default)]`
// liberally because field presence varies across firmware versions.

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard UniFi legacy API response envelope.
///
/// ```json
/// { "meta": { "rc": "ok", "msg": "optional" }, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
pub struct LegacyResponse<T> {
    pub meta: Meta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Metadata from the legacy envelope. `rc` == `"ok"` means success.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub rc: String,
    #[serde(default)]
    pub msg: Option<String>,
}

// ── Site ─────────────────────────────────────────────────────────────

/// Site object from `/api/self/sites`.
///
/// `name` is the internal code used in `/api/s/{name}/...` paths; `desc`
/// is the human-facing label shown in the controller UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySite {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── WLAN ─────────────────────────────────────────────────────────────

/// WLAN configuration from `rest/wlanconf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyWlan {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub mac_filter_enabled: Option<bool>,
    /// `"allow"` or `"deny"`.
    #[serde(default)]
    pub mac_filter_policy: Option<String>,
    /// `null` on some firmware when the list was never populated.
    #[serde(default)]
    pub mac_filter_list: Option<Vec<String>>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Known client ─────────────────────────────────────────────────────

/// Historical client record from `stat/alluser`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub usergroup_name: Option<String>,
    #[serde(default)]
    pub oui: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
