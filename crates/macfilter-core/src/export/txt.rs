// Plain text: one MAC per line, `  # <name>` appended when the name is known.

use std::io::Write;
use std::path::Path;

use super::{Exporter, create};
use crate::error::CoreError;
use crate::model::MacEntry;

pub(super) struct TxtExporter;

impl Exporter for TxtExporter {
    fn write(&self, entries: &[MacEntry], path: &Path) -> Result<(), CoreError> {
        let mut out = create(path)?;
        let io = |e| CoreError::io(path, e);

        for entry in entries {
            let line = match entry.label.known() {
                Some(name) => writeln!(out, "{}  # {name}", entry.mac),
                None => writeln!(out, "{}", entry.mac),
            };
            line.map_err(io)?;
        }
        out.flush().map_err(io)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::export::tests::sample;

    #[test]
    fn writes_one_line_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter.txt");

        TxtExporter.write(&sample(), &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "aa:bb:cc:dd:ee:ff  # Phone\n11:22:33:44:55:66\n"
        );
    }

    #[test]
    fn non_empty_file_ends_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter.txt");

        TxtExporter.write(&sample(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn no_entries_gives_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        TxtExporter.write(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
