//! Browser state and key handling.
//!
//! `App` never performs I/O: key presses that need controller data return
//! an [`Action`] and the event loop feeds the result back through the
//! `show_*` methods.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::{ListState, TableState};
use tui_input::{Input, InputRequest};

use macfilter_core::{CoreError, MacEntry, MacFilterReport, Site, WlanProfile, filter_entries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Sites,
    Wlans,
    Entries,
}

/// Work the event loop must do on the app's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    LoadWlans(Site),
    LoadEntries { site: Site, wlan: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Busy,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub sites: Vec<Site>,
    pub site_state: ListState,
    pub site: Option<Site>,
    pub wlans: Vec<WlanProfile>,
    pub wlan_state: ListState,
    pub report: Option<MacFilterReport>,
    /// Entries matching the current search term.
    pub visible: Vec<MacEntry>,
    pub table_state: TableState,
    pub search: Input,
    pub searching: bool,
    pub status: Status,
}

impl App {
    pub fn new(sites: Vec<Site>) -> Self {
        let mut site_state = ListState::default();
        if !sites.is_empty() {
            site_state.select(Some(0));
        }
        let status = if sites.is_empty() {
            Status::new(StatusKind::Error, "No sites visible to this account.")
        } else {
            Status::new(StatusKind::Info, "Connected. Choose a site and WLAN.")
        };

        Self {
            screen: Screen::Sites,
            sites,
            site_state,
            site: None,
            wlans: Vec::new(),
            wlan_state: ListState::default(),
            report: None,
            visible: Vec::new(),
            table_state: TableState::default(),
            search: Input::default(),
            searching: false,
            status,
        }
    }

    // ── Results from the event loop ──────────────────────────────────

    pub fn set_busy(&mut self, text: impl Into<String>) {
        self.status = Status::new(StatusKind::Busy, text);
    }

    pub fn show_wlans(&mut self, site: Site, wlans: Vec<WlanProfile>) {
        self.status = if wlans.is_empty() {
            Status::new(StatusKind::Info, "No WLANs found for this site.")
        } else {
            Status::new(StatusKind::Info, format!("Choose a WLAN on {}.", site.display_name))
        };
        self.wlan_state = ListState::default();
        if !wlans.is_empty() {
            self.wlan_state.select(Some(0));
        }
        self.site = Some(site);
        self.wlans = wlans;
        self.screen = Screen::Wlans;
    }

    pub fn show_report(&mut self, report: MacFilterReport) {
        let mut text = format!("Loaded {} MAC addresses for {}.", report.entries.len(), report.wlan);
        if report.skipped_count() > 0 {
            text.push_str(&format!(" Skipped {} malformed.", report.skipped_count()));
        }
        self.status = Status::new(StatusKind::Success, text);
        self.search.reset();
        self.searching = false;
        self.report = Some(report);
        self.apply_search();
        self.screen = Screen::Entries;
    }

    /// Report a failure in the status line; the current screen stays.
    pub fn show_error(&mut self, err: &CoreError) {
        let text = match err {
            CoreError::SiteNotFound { available, .. } | CoreError::WlanNotFound { available, .. }
                if !available.is_empty() =>
            {
                format!("{err}. Available: {}", available.join(", "))
            }
            _ => err.to_string(),
        };
        self.status = Status::new(StatusKind::Error, text);
    }

    // ── Key handling ─────────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if self.searching {
            self.handle_search_key(key);
            return Action::None;
        }

        match (self.screen, key.code) {
            (_, KeyCode::Char('q')) | (Screen::Sites, KeyCode::Esc) => Action::Quit,
            (Screen::Wlans, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => {
                self.screen = Screen::Sites;
                Action::None
            }
            (Screen::Entries, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) => {
                self.screen = Screen::Wlans;
                Action::None
            }
            (Screen::Entries, KeyCode::Char('/')) => {
                self.searching = true;
                Action::None
            }
            (_, KeyCode::Up | KeyCode::Char('k')) => {
                self.move_selection(-1);
                Action::None
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => {
                self.move_selection(1);
                Action::None
            }
            (Screen::Sites, KeyCode::Enter | KeyCode::Right) => self
                .site_state
                .selected()
                .and_then(|i| self.sites.get(i))
                .map_or(Action::None, |site| Action::LoadWlans(site.clone())),
            (Screen::Wlans, KeyCode::Enter | KeyCode::Right) => {
                let wlan = self.wlan_state.selected().and_then(|i| self.wlans.get(i));
                match (&self.site, wlan) {
                    (Some(site), Some(wlan)) => Action::LoadEntries {
                        site: site.clone(),
                        wlan: wlan.name.clone(),
                    },
                    _ => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let request = match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.searching = false;
                return;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputRequest::DeleteLine
            }
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            KeyCode::Up | KeyCode::Down => {
                self.move_selection(if key.code == KeyCode::Up { -1 } else { 1 });
                return;
            }
            _ => return,
        };

        if self.search.handle(request).is_some() {
            self.apply_search();
        }
    }

    /// Re-run the live filter against the loaded report.
    fn apply_search(&mut self) {
        self.visible = self
            .report
            .as_ref()
            .map(|r| filter_entries(&r.entries, self.search.value()))
            .unwrap_or_default();
        self.table_state = TableState::default();
        if !self.visible.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        match self.screen {
            Screen::Sites => step(&mut self.site_state, self.sites.len(), delta),
            Screen::Wlans => step(&mut self.wlan_state, self.wlans.len(), delta),
            Screen::Entries => {
                let len = self.visible.len();
                if len == 0 {
                    return;
                }
                let current = self.table_state.selected().unwrap_or(0);
                self.table_state.select(Some(clamp_step(current, len, delta)));
            }
        }
    }
}

fn step(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        return;
    }
    let current = state.selected().unwrap_or(0);
    state.select(Some(clamp_step(current, len, delta)));
}

fn clamp_step(current: usize, len: usize, delta: isize) -> usize {
    current.saturating_add_signed(delta).min(len - 1)
}
