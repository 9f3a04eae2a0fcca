//! Clap derive structures for the `macfilter` binary.
//!
//! A single flat command: connection flags, the site/WLAN selection, and
//! what to do with the result. Also compiled by `build.rs` for man pages,
//! so this file must not depend on anything beyond clap and clap_complete.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

/// macfilter -- export a UniFi WLAN's MAC filter list
#[derive(Debug, Parser)]
#[command(
    name = "macfilter",
    version,
    about = "Export the MAC filter list of a UniFi WLAN, with friendly device names",
    long_about = "Reads the MAC filter list of one WLAN from a UniFi Network controller,\n\
        labels each address with the name of the matching known client, and\n\
        prints it or exports it to TXT, CSV or XLSX.\n\n\
        Without --cli, --out, --search, --output, --list-sites, --list-wlans or\n\
        --completions, and with stdout on a terminal, an interactive browser is\n\
        started instead."
)]
pub struct Cli {
    // ── Connection ───────────────────────────────────────────────────
    /// Controller base URL, e.g. https://192.168.1.1:8443
    #[arg(long, env = "MACFILTER_URL", help_heading = "Connection")]
    pub url: Option<String>,

    /// Controller username
    #[arg(long, env = "MACFILTER_USER", help_heading = "Connection")]
    pub user: Option<String>,

    /// Controller password (falls back to keyring, profile, then a prompt)
    #[arg(
        long,
        env = "MACFILTER_PASSWORD",
        hide_env_values = true,
        help_heading = "Connection"
    )]
    pub password: Option<String>,

    /// Verify the controller's TLS certificate (off by default)
    #[arg(long, env = "MACFILTER_VERIFY_SSL", help_heading = "Connection")]
    pub verify_ssl: bool,

    /// PEM file with a CA certificate to trust (implies --verify-ssl)
    #[arg(long, value_name = "PEM", help_heading = "Connection")]
    pub ca_cert: Option<PathBuf>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(long, env = "MACFILTER_TIMEOUT", value_name = "SECS", help_heading = "Connection")]
    pub timeout: Option<u64>,

    /// Controller flavour; probed when not given
    #[arg(long, value_enum, help_heading = "Connection")]
    pub platform: Option<PlatformArg>,

    // ── Selection ────────────────────────────────────────────────────
    /// Site display name or internal code
    #[arg(long, env = "MACFILTER_SITE", help_heading = "Selection")]
    pub site: Option<String>,

    /// WLAN profile name
    #[arg(long, env = "MACFILTER_WLAN", help_heading = "Selection")]
    pub wlan: Option<String>,

    // ── Output ───────────────────────────────────────────────────────
    /// Export to this file instead of printing
    #[arg(long, value_name = "PATH", help_heading = "Output")]
    pub out: Option<PathBuf>,

    /// Export format [default: from the --out extension, else txt]
    #[arg(long, value_enum, requires = "out", help_heading = "Output")]
    pub format: Option<FormatArg>,

    /// Only print entries whose MAC or name contains this text
    #[arg(long, value_name = "TERM", conflicts_with = "out", help_heading = "Output")]
    pub search: Option<String>,

    /// How printed results are rendered [default: table]
    #[arg(long, short = 'o', value_enum, help_heading = "Output")]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, value_enum, default_value = "auto", help_heading = "Output")]
    pub color: ColorMode,

    // ── Mode ─────────────────────────────────────────────────────────
    /// Never start the interactive browser
    #[arg(long, help_heading = "Mode")]
    pub cli: bool,

    /// List the controller's sites and exit
    #[arg(long, conflicts_with_all = ["list_wlans", "out"], help_heading = "Mode")]
    pub list_sites: bool,

    /// List the WLAN profiles of --site and exit
    #[arg(long, conflicts_with = "out", help_heading = "Mode")]
    pub list_wlans: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", help_heading = "Mode")]
    pub completions: Option<Shell>,

    // ── Global ───────────────────────────────────────────────────────
    /// Configuration profile to use
    #[arg(long, short = 'p', env = "MACFILTER_PROFILE")]
    pub profile: Option<String>,

    /// Configuration file [default: platform config dir]/config.toml
    #[arg(long, env = "MACFILTER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Debug logging (same as -vv)
    #[arg(long)]
    pub debug: bool,

    /// Suppress non-error output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Log file for the interactive browser [default: <temp dir>/macfilter.log]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Effective verbosity, with `--debug` counting as `-vv`.
    pub fn verbosity(&self) -> u8 {
        if self.debug {
            self.verbose.max(2)
        } else {
            self.verbose
        }
    }

    /// Whether anything on the command line rules out the browser. Flags
    /// that only shape printed output count, since the browser ignores them.
    pub fn wants_cli(&self) -> bool {
        self.cli
            || self.out.is_some()
            || self.search.is_some()
            || self.output.is_some()
            || self.list_sites
            || self.list_wlans
            || self.completions.is_some()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }
}

// ── Value enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One MAC per line, `  # name` appended when known
    Txt,
    /// `mac,name` with a header row
    Csv,
    /// Spreadsheet with a `MAC Filter` sheet
    Xlsx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// UniFi OS console (UDM, UCG, Cloud Key Gen2+)
    UnifiOs,
    /// Standalone Network Application
    Classic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, tab-separated (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}
