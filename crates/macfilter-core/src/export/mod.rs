// ── Export ──
//
// Writes labelled filter entries to disk. Each format is one `Exporter`
// implementation; `export` picks the right one for an `ExportFormat`.

mod csv;
mod txt;
#[cfg(feature = "xlsx")]
mod xlsx;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use tracing::info;

use crate::error::CoreError;
use crate::model::MacEntry;

/// On-disk export format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    /// Infer the format from a destination path's extension.
    ///
    /// Returns `None` when the path has no extension or an unrecognised one.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(CoreError::UnsupportedFormat {
                format: s.to_owned(),
            }),
        }
    }
}

/// Serializes entries to one file format.
trait Exporter {
    fn write(&self, entries: &[MacEntry], path: &Path) -> Result<(), CoreError>;
}

/// Entries bound for one destination in one format.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub entries: Vec<MacEntry>,
    pub format: ExportFormat,
    pub destination: PathBuf,
}

impl ExportRequest {
    pub fn new(entries: Vec<MacEntry>, format: ExportFormat, destination: impl Into<PathBuf>) -> Self {
        Self {
            entries,
            format,
            destination: destination.into(),
        }
    }

    pub fn run(&self) -> Result<(), CoreError> {
        export(&self.entries, self.format, &self.destination)
    }
}

/// Write `entries` to `path` in `format`, creating or truncating the file.
///
/// The parent directory must already exist.
pub fn export(entries: &[MacEntry], format: ExportFormat, path: &Path) -> Result<(), CoreError> {
    let exporter: &dyn Exporter = match format {
        ExportFormat::Txt => &txt::TxtExporter,
        ExportFormat::Csv => &csv::CsvExporter,
        #[cfg(feature = "xlsx")]
        ExportFormat::Xlsx => &xlsx::XlsxExporter,
        #[cfg(not(feature = "xlsx"))]
        ExportFormat::Xlsx => {
            return Err(CoreError::CapabilityUnavailable {
                capability: "xlsx".into(),
            });
        }
    };

    exporter.write(entries, path)?;
    info!(path = %path.display(), %format, count = entries.len(), "export written");
    Ok(())
}

/// Open `path` for buffered writing, mapping failures to `CoreError::Io`.
fn create(path: &Path) -> Result<BufWriter<File>, CoreError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| CoreError::io(path, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::model::{Label, MacAddress};

    pub(super) fn sample() -> Vec<MacEntry> {
        vec![
            MacEntry::new(
                MacAddress::parse("aa:bb:cc:dd:ee:ff").unwrap(),
                Label::Known("Phone".into()),
            ),
            MacEntry::new(MacAddress::parse("11:22:33:44:55:66").unwrap(), Label::Unknown),
        ]
    }

    #[test]
    fn parses_formats_case_insensitively() {
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" Xlsx ".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedFormat { ref format } if format == "pdf"));
    }

    #[test]
    fn infers_format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out/list.CSV")), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_path(Path::new("list.xlsx")), Some(ExportFormat::Xlsx));
        assert_eq!(ExportFormat::from_path(Path::new("list")), None);
        assert_eq!(ExportFormat::from_path(Path::new("list.json")), None);
    }

    #[test]
    fn extension_parses_back() {
        for format in ExportFormat::iter() {
            assert_eq!(format.extension().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn missing_parent_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let err = export(&sample(), ExportFormat::Txt, &path).unwrap_err();
        match err {
            CoreError::Io { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected Io, got {other:?}"),
        }
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn request_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale content that is longer than the export\n").unwrap();

        ExportRequest::new(sample()[..1].to_vec(), ExportFormat::Txt, &path)
            .run()
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "aa:bb:cc:dd:ee:ff  # Phone\n");
    }

    #[cfg(not(feature = "xlsx"))]
    #[test]
    fn xlsx_without_feature_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = export(&sample(), ExportFormat::Xlsx, &dir.path().join("out.xlsx")).unwrap_err();
        assert!(matches!(err, CoreError::CapabilityUnavailable { ref capability } if capability == "xlsx"));
    }
}
