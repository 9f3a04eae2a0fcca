// ── MacAddress ──

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// MAC address, normalized to lowercase colon-separated octets
/// (`aa:bb:cc:dd:ee:ff`).
///
/// Parsing accepts colon- or dash-separated pairs, Cisco dotted triplets
/// (`aabb.ccdd.eeff`), and bare 12-digit hex, with surrounding whitespace
/// ignored. Anything that is not exactly six hex octets is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let malformed = || CoreError::MalformedMac {
            raw: raw.to_owned(),
        };
        let trimmed = raw.trim();

        let groups: Vec<&str> = if trimmed.contains(':') && !trimmed.contains('-') {
            trimmed.split(':').collect()
        } else if trimmed.contains('-') && !trimmed.contains(':') {
            trimmed.split('-').collect()
        } else if trimmed.contains('.') {
            trimmed.split('.').collect()
        } else {
            vec![trimmed]
        };

        let group_len = match groups.len() {
            6 => 2,
            3 => 4,
            1 => 12,
            _ => return Err(malformed()),
        };

        let mut hex = String::with_capacity(12);
        for group in &groups {
            if group.len() != group_len || !group.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(malformed());
            }
            hex.push_str(&group.to_ascii_lowercase());
        }

        let mut canonical = String::with_capacity(17);
        for (i, pair) in hex.as_bytes().chunks(2).enumerate() {
            if i > 0 {
                canonical.push(':');
            }
            canonical.extend(pair.iter().map(|&b| char::from(b)));
        }
        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MacAddress {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CANONICAL: &str = "aa:bb:cc:dd:ee:ff";

    #[test]
    fn every_notation_of_one_address_normalizes_identically() {
        for raw in [
            "aa:bb:cc:dd:ee:ff",
            "AA:BB:CC:DD:EE:FF",
            "AA-BB-CC-DD-EE-FF",
            "aa-bb-cc-dd-ee-ff",
            "aabb.ccdd.eeff",
            "AABB.CCDD.EEFF",
            "aabbccddeeff",
            "AaBbCcDdEeFf",
            "  aa:bb:cc:dd:ee:ff\t",
            "\nAA-BB-CC-DD-EE-FF ",
        ] {
            assert_eq!(MacAddress::parse(raw).unwrap().as_str(), CANONICAL, "input {raw:?}");
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = MacAddress::parse("0A-1B-2C-3D-4E-5F").unwrap();
        let twice = MacAddress::parse(once.as_str()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.as_str(), "0a:1b:2c:3d:4e:5f");
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in [
            "",
            "not-a-mac",
            "aa:bb:cc:dd:ee",
            "aa:bb:cc:dd:ee:ff:00",
            "aa:bb:cc:dd:ee:fg",
            "a:b:c:d:e:f",
            "aa:bb-cc:dd-ee:ff",
            "aabbccddeef",
            "aa bb cc dd ee ff",
        ] {
            let err = MacAddress::parse(raw).unwrap_err();
            assert!(
                matches!(err, CoreError::MalformedMac { raw: ref r } if r == raw),
                "input {raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn from_str_and_display_round_trip() {
        let mac: MacAddress = "11-22-33-44-55-66".parse().unwrap();
        assert_eq!(mac.to_string(), "11:22:33:44:55:66");
    }

    #[test]
    fn serializes_as_plain_string() {
        let mac = MacAddress::parse(CANONICAL).unwrap();
        assert_eq!(serde_json::to_string(&mac).unwrap(), "\"aa:bb:cc:dd:ee:ff\"");
    }
}
