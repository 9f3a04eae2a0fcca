// XLSX: single `MAC Filter` worksheet, bold `MAC`/`Name` header, autofit.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::Exporter;
use crate::error::CoreError;
use crate::model::MacEntry;

pub(super) const SHEET_NAME: &str = "MAC Filter";

pub(super) struct XlsxExporter;

impl Exporter for XlsxExporter {
    fn write(&self, entries: &[MacEntry], path: &Path) -> Result<(), CoreError> {
        let to_core = |e: XlsxError| match e {
            XlsxError::IoError(source) => CoreError::io(path, source),
            other => CoreError::Export {
                format: "XLSX",
                message: other.to_string(),
            },
        };

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).map_err(to_core)?;

        let header = Format::new().set_bold();
        sheet.write_string_with_format(0, 0, "MAC", &header).map_err(to_core)?;
        sheet.write_string_with_format(0, 1, "Name", &header).map_err(to_core)?;

        for (row, entry) in (1u32..).zip(entries) {
            sheet.write_string(row, 0, entry.mac.as_str()).map_err(to_core)?;
            sheet.write_string(row, 1, entry.name()).map_err(to_core)?;
        }
        sheet.autofit();

        workbook.save(path).map_err(to_core)
    }
}
