use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::errors::{LatchscanError, Result};
use crate::core::services::date_resolver::DEFAULT_DATE_FORMAT;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "latchscan.toml";

/// Log file scanned when nothing else is configured.
pub const DEFAULT_LOG_PATH: &str = "latchburg.log";

/// SMTP submission port, used with STARTTLS.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Run configuration, read from `latchscan.toml`.
///
/// Every field has a default, so an empty or missing file yields a
/// console-only run over `latchburg.log`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    /// Pattern the date argument is parsed with.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Absent means the report is printed to stdout.
    pub mail: Option<MailSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            date_format: default_date_format(),
            mail: None,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LatchscanError::InvalidConfig {
            detail: format!("Failed to parse {CONFIG_FILE_NAME}: {e}"),
        })
    }

    /// Load the configuration from an explicit file, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LatchscanError::InvalidConfig {
                detail: format!("config file {} not found", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Find the configuration file to use, if any.
    ///
    /// An explicit path wins; otherwise `./latchscan.toml`, then
    /// `<config dir>/latchscan/config.toml`.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("latchscan").join("config.toml"))
            .filter(|p| p.is_file())
    }

    /// Locate and load, falling back to defaults when no file is found.
    /// Returns the path that was read alongside the config.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match Self::locate(explicit) {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Mail settings, only when every required value is filled in.
    pub fn complete_mail(&self) -> Option<&MailSettings> {
        self.mail.as_ref().filter(|m| m.is_complete())
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

/// The `[mail]` section.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MailSettings {
    #[serde(default)]
    pub server: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub recipients: Vec<String>,
}

impl MailSettings {
    /// True when server, credentials, sender and at least one recipient
    /// are all non-empty.
    pub fn is_complete(&self) -> bool {
        let filled = [&self.server, &self.user, &self.pass, &self.sender]
            .iter()
            .all(|v| !v.trim().is_empty());
        filled && self.recipients.iter().any(|r| !r.trim().is_empty())
    }
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &"<hidden>")
            .field("sender", &self.sender)
            .field("recipients", &self.recipients)
            .finish()
    }
}
