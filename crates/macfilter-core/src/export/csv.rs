// CSV: `mac,name` header, RFC 4180 quoting, `\n` line endings.

use std::path::Path;

use super::{Exporter, create};
use crate::error::CoreError;
use crate::model::MacEntry;

pub(super) struct CsvExporter;

impl Exporter for CsvExporter {
    fn write(&self, entries: &[MacEntry], path: &Path) -> Result<(), CoreError> {
        let mut writer = ::csv::WriterBuilder::new()
            .terminator(::csv::Terminator::Any(b'\n'))
            .from_writer(create(path)?);

        let to_core = |e: ::csv::Error| match e.into_kind() {
            ::csv::ErrorKind::Io(source) => CoreError::io(path, source),
            other => CoreError::Export {
                format: "CSV",
                message: format!("{other:?}"),
            },
        };

        writer.write_record(["mac", "name"]).map_err(to_core)?;
        for entry in entries {
            writer
                .write_record([entry.mac.as_str(), entry.name()])
                .map_err(to_core)?;
        }
        writer.flush().map_err(|e| CoreError::io(path, e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::export::tests::sample;
    use crate::model::{Label, MacAddress};

    #[test]
    fn writes_header_and_rows_with_lf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter.csv");

        CsvExporter.write(&sample(), &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "mac,name\naa:bb:cc:dd:ee:ff,Phone\n11:22:33:44:55:66,Unknown\n"
        );
    }

    #[test]
    fn round_trips_names_with_commas_and_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter.csv");
        let tricky = "Bob's \"work\" laptop, 2nd floor";
        let entries = vec![MacEntry::new(
            MacAddress::parse("aa:bb:cc:dd:ee:ff").unwrap(),
            Label::Known(tricky.into()),
        )];

        CsvExporter.write(&entries, &path).unwrap();

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, vec!["mac", "name"]);
        let rows: Vec<(String, String)> = reader.deserialize().map(Result::unwrap).collect();
        assert_eq!(rows, vec![("aa:bb:cc:dd:ee:ff".to_owned(), tricky.to_owned())]);
    }

    #[test]
    fn no_entries_writes_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        CsvExporter.write(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "mac,name\n");
    }
}
