//! Interactive browser: site list, WLAN list, then the labelled filter
//! table with a live search box.
//!
//! The session is opened (and any password prompt answered) before the
//! terminal switches to the alternate screen. Controller calls run on the
//! caller's current-thread runtime between frames.

mod app;
mod terminal;
mod theme;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use macfilter_core::{
    ControllerSession, CoreError, MacFilterReport, Site, WlanProfile, build_report, find_wlan,
    resolve_site,
};

use self::app::{Action, App};
use self::terminal::Tui;
use crate::commands;
use crate::config::Settings;
use crate::error::CliError;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub fn run(rt: &Runtime, settings: &Settings) -> Result<(), CliError> {
    settings.require(false, false)?;

    let session = rt.block_on(commands::connect(settings))?;
    let sites = match rt.block_on(session.list_sites()) {
        Ok(sites) => sites,
        Err(e) => {
            rt.block_on(session.close());
            return Err(e.into());
        }
    };

    let mut app = App::new(sites);
    preselect(rt, &session, &mut app, settings);

    let result = event_loop(rt, &session, &mut app);
    rt.block_on(session.close());
    result
}

/// Jump ahead when `--site` / `--wlan` were given. Failures only land in
/// the status line.
fn preselect(rt: &Runtime, session: &ControllerSession, app: &mut App, settings: &Settings) {
    let Some(query) = settings.site.as_deref() else {
        return;
    };
    let site = match resolve_site(&app.sites, query) {
        Ok(site) => site.clone(),
        Err(e) => {
            app.show_error(&e);
            return;
        }
    };

    perform(rt, session, app, Action::LoadWlans(site.clone()));
    if let Some(wlan) = settings.wlan.clone() {
        if app.site.as_ref() == Some(&site) {
            perform(rt, session, app, Action::LoadEntries { site, wlan });
        }
    }
}

fn event_loop(rt: &Runtime, session: &ControllerSession, app: &mut App) -> Result<(), CliError> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    loop {
        tui.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            Action::None => {}
            Action::Quit => break,
            action => {
                match &action {
                    Action::LoadWlans(site) => {
                        app.set_busy(format!("Loading WLANs for {}...", site.display_name));
                    }
                    Action::LoadEntries { wlan, .. } => {
                        app.set_busy(format!("Loading MAC filter list for {wlan}..."));
                    }
                    Action::None | Action::Quit => {}
                }
                tui.draw(|frame| ui::draw(frame, app))?;
                perform(rt, session, app, action);
            }
        }
    }

    tui.exit();
    Ok(())
}

/// Run one controller-backed action and feed the result into the app.
fn perform(rt: &Runtime, session: &ControllerSession, app: &mut App, action: Action) {
    match action {
        Action::LoadWlans(site) => match rt.block_on(session.list_wlans(&site.code)) {
            Ok(wlans) => {
                debug!(site = %site.code, count = wlans.len(), "WLANs loaded");
                app.show_wlans(site, wlans);
            }
            Err(e) => app.show_error(&e),
        },
        Action::LoadEntries { site, wlan } => {
            match rt.block_on(load_report(session, site, &app.wlans, &wlan)) {
                Ok(report) => {
                    info!(wlan = %report.wlan, entries = report.entries.len(), "MAC filter list loaded");
                    app.show_report(report);
                }
                Err(e) => app.show_error(&e),
            }
        }
        Action::None | Action::Quit => {}
    }
}

/// The WLAN list is already on screen, so only the catalogue is fetched.
async fn load_report(
    session: &ControllerSession,
    site: Site,
    wlans: &[WlanProfile],
    wlan: &str,
) -> Result<MacFilterReport, CoreError> {
    find_wlan(wlans, wlan)?;
    let devices = session.list_known_devices(&site.code).await?;
    build_report(site, wlans, devices, wlan)
}
