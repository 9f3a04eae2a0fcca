//! Domain logic for exporting a UniFi WLAN's MAC filter list.
//!
//! The crate sits between `macfilter-api` (raw HTTP + JSON envelopes) and the
//! `macfilter` front-ends (CLI and terminal browser):
//!
//! - **[`ControllerSession`]** — an explicitly owned, authenticated session.
//!   Created by [`ControllerSession::connect`], passed to every fetch, closed
//!   with [`ControllerSession::close`]. There is no process-wide session.
//!
//! - **Resolution** — [`resolve_site`] maps a user-entered site descriptor to
//!   the internal site code; [`extract`] finds a WLAN profile by name and
//!   normalizes its filter list, skipping malformed values.
//!
//! - **Labelling** — [`NameIndex`] maps MACs to friendly names from the known
//!   client catalogue; anything unmatched becomes [`Label::Unknown`].
//!
//! - **Output** — [`export`] writes TXT, CSV or XLSX; [`filter_entries`] is the
//!   live substring filter used by interactive views.
//!
//! [`fetch_report`] runs the whole pipeline against a session, and
//! [`build_report`] runs the pure part of it on already-fetched data.

pub mod config;
pub mod credentials;
pub mod error;
pub mod export;
pub mod extract;
pub mod filter;
pub mod model;
pub mod names;
pub mod report;
pub mod resolve;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{PlatformHint, SessionConfig, TlsVerification};
pub use credentials::{CredentialProvider, StaticCredentials};
pub use error::CoreError;
pub use export::{ExportFormat, ExportRequest, export};
pub use extract::{Extraction, extract, find_wlan};
pub use filter::filter_entries;
pub use model::{FilterPolicy, KnownDevice, Label, MacAddress, MacEntry, Site, WlanProfile};
pub use names::NameIndex;
pub use report::{MacFilterReport, build_report, fetch_report};
pub use resolve::resolve_site;
pub use session::ControllerSession;
