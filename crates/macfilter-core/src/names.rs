// ── Name resolution ──
//
// Builds the MAC -> friendly name index from the known-client catalogue and
// labels filter entries with it.

use std::collections::HashMap;

use crate::model::{KnownDevice, Label, MacAddress, MacEntry};

/// Lookup table from canonical MAC to friendly name.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    names: HashMap<MacAddress, String>,
}

impl NameIndex {
    /// Index a catalogue. Later entries overwrite earlier ones for the
    /// same MAC, so the controller's ordering decides ties.
    pub fn build<I>(devices: I) -> Self
    where
        I: IntoIterator<Item = KnownDevice>,
    {
        let names = devices.into_iter().map(|d| (d.mac, d.name)).collect();
        Self { names }
    }

    pub fn resolve(&self, mac: &MacAddress) -> Label {
        self.names
            .get(mac)
            .map_or(Label::Unknown, |name| Label::Known(name.clone()))
    }

    /// Attach labels to a list of MACs, preserving order.
    pub fn label(&self, macs: Vec<MacAddress>) -> Vec<MacEntry> {
        macs.into_iter()
            .map(|mac| {
                let label = self.resolve(&mac);
                MacEntry::new(mac, label)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<KnownDevice> for NameIndex {
    fn from_iter<T: IntoIterator<Item = KnownDevice>>(iter: T) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mac(raw: &str) -> MacAddress {
        MacAddress::parse(raw).unwrap()
    }

    #[test]
    fn resolves_known_and_unknown() {
        let index = NameIndex::build([KnownDevice::new(mac("aa:bb:cc:dd:ee:ff"), "Laptop")]);

        assert_eq!(index.resolve(&mac("AA-BB-CC-DD-EE-FF")), Label::Known("Laptop".into()));
        assert_eq!(index.resolve(&mac("77:88:99:aa:bb:cc")), Label::Unknown);
        assert_eq!(index.resolve(&mac("77:88:99:aa:bb:cc")).as_str(), "Unknown");
    }

    #[test]
    fn last_catalogue_entry_wins() {
        let index: NameIndex = [
            KnownDevice::new(mac("11:22:33:44:55:66"), "old-name"),
            KnownDevice::new(mac("aa:bb:cc:dd:ee:ff"), "Phone"),
            KnownDevice::new(mac("11:22:33:44:55:66"), "Tablet"),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve(&mac("11:22:33:44:55:66")).as_str(), "Tablet");
    }

    #[test]
    fn label_preserves_order_and_duplicates() {
        let index = NameIndex::build([KnownDevice::new(mac("aa:bb:cc:dd:ee:ff"), "Phone")]);
        let entries = index.label(vec![
            mac("11:22:33:44:55:66"),
            mac("aa:bb:cc:dd:ee:ff"),
            mac("11:22:33:44:55:66"),
        ]);

        let names: Vec<&str> = entries.iter().map(MacEntry::name).collect();
        assert_eq!(names, vec!["Unknown", "Phone", "Unknown"]);
    }

    #[test]
    fn empty_catalogue_labels_everything_unknown() {
        let index = NameIndex::default();
        assert!(index.is_empty());
        let entries = index.label(vec![mac("aa:bb:cc:dd:ee:ff")]);
        assert_eq!(entries[0].label, Label::Unknown);
    }
}
