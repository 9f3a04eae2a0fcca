//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders results in the format selected by `--output`. Table uses
//! `tabled`, structured formats use serde, plain emits tab-separated lines.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use macfilter_core::{ExportFormat, MacEntry, MacFilterReport, Site, WlanProfile};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EntryRow<'a> {
    #[tabled(rename = "MAC")]
    mac: &'a str,
    #[tabled(rename = "Name")]
    name: &'a str,
}

#[derive(Tabled)]
struct SiteRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Code")]
    code: &'a str,
}

#[derive(Tabled)]
struct WlanRow<'a> {
    #[tabled(rename = "WLAN")]
    name: &'a str,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
    #[tabled(rename = "MAC Filter")]
    filter: String,
    #[tabled(rename = "Entries")]
    entries: usize,
}

// ── Renderers ────────────────────────────────────────────────────────

/// Render filter entries. `report` supplies the structured payload for
/// JSON/YAML so consumers also see the site, WLAN and skipped values.
pub fn render_entries(
    format: OutputFormat,
    report: &MacFilterReport,
    entries: &[MacEntry],
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table if entries.is_empty() => Ok("No MAC addresses found.".into()),
        OutputFormat::Table => Ok(render_table(entries.iter().map(|e| EntryRow {
            mac: e.mac.as_str(),
            name: e.name(),
        }))),
        OutputFormat::Json => render_json(&Printed::new(report, entries)),
        OutputFormat::Yaml => render_yaml(&Printed::new(report, entries)),
        OutputFormat::Plain => Ok(entries
            .iter()
            .map(|e| format!("{}\t{}", e.mac, e.name()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_sites(format: OutputFormat, sites: &[Site]) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(sites.iter().map(|s| SiteRow {
            name: &s.display_name,
            code: &s.code,
        }))),
        OutputFormat::Json => render_json(sites),
        OutputFormat::Yaml => render_yaml(sites),
        OutputFormat::Plain => Ok(sites
            .iter()
            .map(|s| format!("{}\t{}", s.code, s.display_name))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_wlans(format: OutputFormat, wlans: &[WlanProfile]) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => Ok(render_table(wlans.iter().map(|w| WlanRow {
            name: &w.name,
            enabled: if w.enabled { "yes" } else { "no" },
            filter: if w.mac_filter_enabled {
                w.mac_filter_policy.to_string()
            } else {
                "off".into()
            },
            entries: w.mac_filter_list.len(),
        }))),
        OutputFormat::Json => render_json(wlans),
        OutputFormat::Yaml => render_yaml(wlans),
        OutputFormat::Plain => Ok(wlans
            .iter()
            .map(|w| w.name.clone())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// `Exported N entries to PATH (FORMAT).` with the skipped count appended
/// when something was dropped.
pub fn export_summary(count: usize, path: &str, format: ExportFormat, skipped: usize) -> String {
    let mut line = format!("Exported {count} entries to {path} ({format})");
    if skipped > 0 {
        line.push_str(&format!(", skipped {skipped} malformed"));
    }
    line.push('.');
    line
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print a success line, green when color is on.
pub fn print_success(message: &str, quiet: bool, color: bool) {
    if color {
        print_output(&message.green().to_string(), quiet);
    } else {
        print_output(message, quiet);
    }
}

/// Warn on stderr about filter values that were not MAC addresses.
pub fn warn_skipped(skipped: &[String], quiet: bool, color: bool) {
    if quiet || skipped.is_empty() {
        return;
    }
    let line = format!(
        "warning: skipped {} malformed filter entr{}: {}",
        skipped.len(),
        if skipped.len() == 1 { "y" } else { "ies" },
        skipped.join(", ")
    );
    if color {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{line}");
    }
}

// ── Format-specific renderers ────────────────────────────────────────

/// A report with its entries narrowed by `--search`.
#[derive(Serialize)]
struct Printed<'a> {
    site: &'a Site,
    wlan: &'a str,
    entries: &'a [MacEntry],
    skipped: &'a [String],
}

impl<'a> Printed<'a> {
    fn new(report: &'a MacFilterReport, entries: &'a [MacEntry]) -> Self {
        Self {
            site: &report.site,
            wlan: &report.wlan,
            entries,
            skipped: &report.skipped,
        }
    }
}

fn render_table<R: Tabled>(rows: impl IntoIterator<Item = R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(data).map_err(|e| CliError::Api {
        message: format!("JSON serialization failed: {e}"),
    })
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Api {
        message: format!("YAML serialization failed: {e}"),
    })
}
