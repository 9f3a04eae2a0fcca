// ── MAC filter rows ──

use std::fmt;

use serde::{Serialize, Serializer};

use super::mac::MacAddress;

/// Friendly name attached to a filter entry.
///
/// `Unknown` is the sentinel for MACs absent from the known-client
/// catalogue; it renders as `"Unknown"` wherever a name is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Known(String),
    Unknown,
}

impl Label {
    pub const UNKNOWN: &'static str = "Unknown";

    /// The displayed name, `"Unknown"` for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(name) => name,
            Self::Unknown => Self::UNKNOWN,
        }
    }

    /// The resolved name, if there is one.
    pub fn known(&self) -> Option<&str> {
        match self {
            Self::Known(name) => Some(name),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of a WLAN's MAC filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacEntry {
    pub mac: MacAddress,
    #[serde(rename = "name")]
    pub label: Label,
}

impl MacEntry {
    pub fn new(mac: MacAddress, label: Label) -> Self {
        Self { mac, label }
    }

    /// Displayed name (`"Unknown"` when unresolved).
    pub fn name(&self) -> &str {
        self.label.as_str()
    }
}
