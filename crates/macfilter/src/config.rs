//! CLI-owned configuration: TOML profiles, credential resolution, and
//! translation to `macfilter_core::SessionConfig`.
//!
//! Core never sees these types -- it receives a pre-built `SessionConfig`
//! and a `CredentialProvider`.

use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use macfilter_core::{CoreError, CredentialProvider, PlatformHint, SessionConfig, TlsVerification};

use crate::cli::{Cli, PlatformArg};
use crate::error::CliError;

const KEYRING_SERVICE: &str = "macfilter";

// ── TOML config structs ──────────────────────────────────────────────

/// Contents of `config.toml`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when --profile is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub verify_ssl: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            verify_ssl: false,
        }
    }
}

fn default_timeout() -> u64 {
    SessionConfig::DEFAULT_TIMEOUT.as_secs()
}

/// One controller + selection preset.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    pub url: Option<String>,
    pub username: Option<String>,
    /// Plaintext password (prefer the keyring).
    pub password: Option<String>,
    pub site: Option<String>,
    pub wlan: Option<String>,
    pub verify_ssl: Option<bool>,
    pub ca_cert: Option<PathBuf>,
    pub timeout: Option<u64>,
    /// `auto`, `unifi-os` or `classic`.
    pub platform: Option<String>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "macfilter").map_or_else(
        || {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            Path::new(&home).join(".config").join("macfilter").join("config.toml")
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the config: defaults, then the TOML file, then `MACFILTER_*`
/// variables (`__` separates nesting, e.g. `MACFILTER_DEFAULTS__TIMEOUT`).
///
/// A missing file is not an error.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("MACFILTER_").split("__"));

    let config: Config = figment.extract()?;
    debug!(path = %path.display(), profiles = config.profiles.len(), "configuration loaded");
    Ok(config)
}

/// Load the file named by `--config`, or the default location.
pub fn load_for(cli: &Cli) -> Result<(Config, PathBuf), CliError> {
    match &cli.config {
        Some(path) if !path.exists() => Err(CliError::Validation {
            field: "config".into(),
            reason: format!("{} does not exist", path.display()),
        }),
        Some(path) => Ok((load_config(path)?, path.clone())),
        None => {
            let path = config_path();
            Ok((load_config(&path)?, path))
        }
    }
}

// ── Settings ─────────────────────────────────────────────────────────

/// Flags merged over the active profile. Flags and `MACFILTER_*`
/// variables win over profile values.
#[derive(Debug)]
pub struct Settings {
    pub profile: String,
    pub url: Option<String>,
    pub username: Option<String>,
    pub site: Option<String>,
    pub wlan: Option<String>,
    pub tls: TlsVerification,
    pub timeout: Duration,
    pub platform: PlatformHint,
    password_flag: Option<SecretString>,
    password_plain: Option<SecretString>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config, config_path: &Path) -> Result<Self, CliError> {
        let (profile_name, profile) = select_profile(cli, config, config_path)?;

        let verify = cli.verify_ssl || profile.verify_ssl.unwrap_or(config.defaults.verify_ssl);
        let tls = match cli.ca_cert.clone().or_else(|| profile.ca_cert.clone()) {
            Some(ca) => TlsVerification::CustomCa(ca),
            None if verify => TlsVerification::SystemDefaults,
            None => TlsVerification::DangerAcceptInvalid,
        };

        let timeout_secs = cli
            .timeout
            .or(profile.timeout)
            .unwrap_or(config.defaults.timeout);
        if timeout_secs == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let platform = match cli.platform {
            Some(PlatformArg::UnifiOs) => PlatformHint::UnifiOs,
            Some(PlatformArg::Classic) => PlatformHint::Classic,
            None => parse_platform(profile.platform.as_deref())?,
        };

        Ok(Self {
            url: cli.url.clone().or(profile.url),
            username: cli.user.clone().or(profile.username),
            site: cli.site.clone().or(profile.site),
            wlan: cli.wlan.clone().or(profile.wlan),
            tls,
            timeout: Duration::from_secs(timeout_secs),
            platform,
            password_flag: cli.password.clone().map(SecretString::from),
            password_plain: profile.password.map(SecretString::from),
            profile: profile_name,
        })
    }

    /// Fail with every missing required flag named at once.
    pub fn require(&self, site: bool, wlan: bool) -> Result<(), CliError> {
        let checks = [
            ("--url", self.url.is_some()),
            ("--user", self.username.is_some()),
            ("--site", !site || self.site.is_some()),
            ("--wlan", !wlan || self.wlan.is_some()),
        ];
        let missing: Vec<&str> = checks
            .iter()
            .filter(|(_, present)| !present)
            .map(|(flag, _)| *flag)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CliError::MissingArguments {
                flags: missing.join(", "),
            })
        }
    }

    pub fn session_config(&self) -> Result<SessionConfig, CliError> {
        self.require(false, false)?;
        let raw = self.url.as_deref().unwrap_or_default();
        let username = self.username.clone().unwrap_or_default();

        let mut session = SessionConfig::new(parse_url(raw)?, username);
        session.tls = self.tls.clone();
        session.timeout = self.timeout;
        session.platform = self.platform;
        Ok(session)
    }

    /// Password lookup chain for this profile. Prompts only when
    /// `interactive` is set.
    pub fn credentials(&self, interactive: bool) -> CredentialChain {
        CredentialChain {
            profile: self.profile.clone(),
            flag: self.password_flag.clone(),
            plaintext: self.password_plain.clone(),
            interactive,
        }
    }
}

fn select_profile(
    cli: &Cli,
    config: &Config,
    config_path: &Path,
) -> Result<(String, Profile), CliError> {
    if let Some(name) = &cli.profile {
        let profile = config.profiles.get(name).ok_or_else(|| {
            let mut names: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            names.sort_unstable();
            CliError::ProfileNotFound {
                name: name.clone(),
                available: if names.is_empty() {
                    "(none)".into()
                } else {
                    names.join(", ")
                },
                path: config_path.display().to_string(),
            }
        })?;
        return Ok((name.clone(), profile.clone()));
    }

    let name = config
        .default_profile
        .clone()
        .unwrap_or_else(|| "default".into());
    let profile = config.profiles.get(&name).cloned().unwrap_or_default();
    Ok((name, profile))
}

fn parse_platform(raw: Option<&str>) -> Result<PlatformHint, CliError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("auto") => Ok(PlatformHint::Auto),
        Some("unifi-os" | "unifios") => Ok(PlatformHint::UnifiOs),
        Some("classic") => Ok(PlatformHint::Classic),
        Some(other) => Err(CliError::Validation {
            field: "platform".into(),
            reason: format!("expected 'auto', 'unifi-os' or 'classic', got '{other}'"),
        }),
    }
}

/// Parse a controller URL, assuming `https://` when no scheme is given.
fn parse_url(raw: &str) -> Result<Url, CliError> {
    let candidate = if raw.contains("://") {
        raw.to_owned()
    } else {
        format!("https://{raw}")
    };
    Url::parse(&candidate).map_err(|e| CliError::Validation {
        field: "url".into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })
}

// ── Credential chain ─────────────────────────────────────────────────

/// Resolves the password: flag/env, system keyring, profile plaintext,
/// then an interactive prompt.
pub struct CredentialChain {
    profile: String,
    flag: Option<SecretString>,
    plaintext: Option<SecretString>,
    interactive: bool,
}

impl CredentialChain {
    fn keyring_password(&self) -> Option<SecretString> {
        let key = format!("{}/password", self.profile);
        let entry = keyring::Entry::new(KEYRING_SERVICE, &key).ok()?;
        match entry.get_password() {
            Ok(pw) => {
                debug!(entry = %key, "password found in keyring");
                Some(SecretString::from(pw))
            }
            Err(e) => {
                debug!(entry = %key, error = %e, "no keyring password");
                None
            }
        }
    }
}

impl CredentialProvider for CredentialChain {
    fn password(&self, username: &str) -> Result<SecretString, CoreError> {
        if let Some(pw) = &self.flag {
            return Ok(pw.clone());
        }
        if let Some(pw) = self.keyring_password() {
            return Ok(pw);
        }
        if let Some(pw) = &self.plaintext {
            return Ok(pw.clone());
        }

        if self.interactive && std::io::stdin().is_terminal() {
            let entered = dialoguer::Password::new()
                .with_prompt(format!("UniFi password for {username}"))
                .interact();
            match entered {
                Ok(pw) if !pw.is_empty() => return Ok(SecretString::from(pw)),
                Ok(_) => debug!("empty password entered"),
                Err(e) => debug!(error = %e, "password prompt failed"),
            }
        }

        Err(CoreError::NoCredentials {
            username: username.to_owned(),
        })
    }
}
