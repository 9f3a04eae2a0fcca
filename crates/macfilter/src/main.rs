//! `macfilter` -- export a UniFi WLAN's MAC filter list.
//!
//! Entry point: argument parsing, tracing setup, mode selection, and
//! error reporting with exit codes.

mod browse;
mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::Context;
use crate::config::Settings;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "macfilter", &mut io::stdout());
        return;
    }

    let browse = !cli.wants_cli() && io::stdout().is_terminal();

    // Held for the whole run so buffered log lines are flushed on exit.
    let _log_guard = if browse {
        init_file_tracing(&cli)
    } else {
        init_tracing(&cli);
        None
    };

    if let Err(err) = run(&cli, browse) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn level(cli: &Cli) -> &'static str {
    if cli.quiet {
        return "error";
    }
    match cli.verbosity() {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(cli))),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// The browser owns the terminal, so logs go to a file instead.
fn init_file_tracing(cli: &Cli) -> Option<WorkerGuard> {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("macfilter.log"));
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let file_name = path.file_name()?.to_owned();

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(cli))))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Some(guard)
}

fn run(cli: &Cli, browse: bool) -> Result<(), CliError> {
    let (config, config_path) = config::load_for(cli)?;
    let settings = Settings::resolve(cli, &config, &config_path)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if browse {
        return browse::run(&rt, &settings);
    }

    let ctx = Context::new(cli, &settings);
    rt.block_on(commands::dispatch(&ctx))
}
