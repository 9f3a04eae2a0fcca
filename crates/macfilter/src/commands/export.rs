//! Fetch one WLAN's filter list and print or export it.

use macfilter_core::{ExportFormat, fetch_report, filter_entries};
use tracing::debug;

use super::{Context, connect, spinner};
use crate::cli::FormatArg;
use crate::error::CliError;
use crate::output;

pub async fn handle(ctx: &Context<'_>) -> Result<(), CliError> {
    let settings = ctx.settings;
    settings.require(true, true)?;
    let site = settings.site.as_deref().unwrap_or_default();
    let wlan = settings.wlan.as_deref().unwrap_or_default();

    let session = connect(settings).await?;
    let progress = spinner("Fetching MAC filter list...", ctx.cli.quiet);
    let fetched = fetch_report(&session, site, wlan).await;
    session.close().await;
    progress.finish_and_clear();
    let report = fetched?;

    output::warn_skipped(&report.skipped, ctx.cli.quiet, ctx.color);

    let Some(path) = &ctx.cli.out else {
        let term = ctx.cli.search.as_deref().unwrap_or_default();
        let shown = filter_entries(&report.entries, term);
        debug!(total = report.entries.len(), shown = shown.len(), "printing entries");
        let rendered = output::render_entries(ctx.cli.output_format(), &report, &shown)?;
        output::print_output(&rendered, ctx.cli.quiet);
        return Ok(());
    };

    let format = resolve_format(ctx.cli.format, path);
    macfilter_core::export(&report.entries, format, path)?;

    let summary = output::export_summary(
        report.entries.len(),
        &path.display().to_string(),
        format,
        report.skipped_count(),
    );
    output::print_success(&summary, ctx.cli.quiet, ctx.color);
    Ok(())
}

/// `--format` wins; otherwise the destination's extension; otherwise TXT.
fn resolve_format(flag: Option<FormatArg>, path: &std::path::Path) -> ExportFormat {
    match flag {
        Some(FormatArg::Txt) => ExportFormat::Txt,
        Some(FormatArg::Csv) => ExportFormat::Csv,
        Some(FormatArg::Xlsx) => ExportFormat::Xlsx,
        None => ExportFormat::from_path(path).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn explicit_format_beats_extension() {
        assert_eq!(resolve_format(Some(FormatArg::Csv), Path::new("out.xlsx")), ExportFormat::Csv);
    }

    #[test]
    fn extension_is_used_when_format_is_omitted() {
        assert_eq!(resolve_format(None, Path::new("out.XLSX")), ExportFormat::Xlsx);
        assert_eq!(resolve_format(None, Path::new("out.list")), ExportFormat::Txt);
        assert_eq!(resolve_format(None, Path::new("out")), ExportFormat::Txt);
    }
}
