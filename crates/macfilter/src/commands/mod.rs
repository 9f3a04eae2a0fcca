//! Non-interactive command handlers.

pub mod export;
pub mod inventory;

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use macfilter_core::ControllerSession;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

/// What a handler needs besides the session.
pub struct Context<'a> {
    pub cli: &'a Cli,
    pub settings: &'a Settings,
    pub color: bool,
}

impl<'a> Context<'a> {
    pub fn new(cli: &'a Cli, settings: &'a Settings) -> Self {
        Self {
            cli,
            settings,
            color: output::should_color(cli.color),
        }
    }
}

/// Run the selected non-interactive command.
pub async fn dispatch(ctx: &Context<'_>) -> Result<(), CliError> {
    if ctx.cli.list_sites {
        inventory::list_sites(ctx).await
    } else if ctx.cli.list_wlans {
        inventory::list_wlans(ctx).await
    } else {
        export::handle(ctx).await
    }
}

/// Log in with the settings' connection details. May prompt for a password
/// when stdin is a terminal.
pub async fn connect(settings: &Settings) -> Result<ControllerSession, CliError> {
    let config = settings.session_config()?;
    let credentials = settings.credentials(true);
    ControllerSession::connect(&config, &credentials)
        .await
        .map_err(|e| CliError::from(e).with_profile(&settings.profile))
}

/// Spinner on stderr; hidden when stderr is not a terminal or output is
/// suppressed.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_owned());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
