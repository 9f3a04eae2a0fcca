// ── Live filter ──

use crate::model::MacEntry;

/// Entries whose MAC or displayed name contains `term`, case-insensitively,
/// in their original order. An empty term returns every entry.
///
/// Pure and allocation-light; meant to run on every keystroke.
pub fn filter_entries(entries: &[MacEntry], term: &str) -> Vec<MacEntry> {
    if term.is_empty() {
        return entries.to_vec();
    }

    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.mac.as_str().contains(&needle) || entry.name().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
