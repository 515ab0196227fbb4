//! # Settings Loader
//!
//! Loads the API server settings from a JSON file, falling back to defaults
//! when no file is present, and applies `HOST` / `PORT` environment overrides.
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! // Explicit file
//! let settings = settings_loader::load_settings("config/server.json")?;
//!
//! // Optional file, defaults when missing, then environment overrides
//! let path = Some(PathBuf::from("settings.json"));
//! let settings = settings_loader::load_settings_with_fallback(path.as_ref())?;
//! let settings = settings_loader::apply_env_overrides(settings, |key| std::env::var(key).ok())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "backend_api=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerSettings {
    /// `host:port` as accepted by `TcpListener::bind`. IPv6 literals are bracketed.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Loads settings from a JSON file. Keys missing from the file keep their defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<ServerSettings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading settings file: {}", path.display()))?;
    let settings: ServerSettings = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing settings JSON in {}", path.display()))?;
    Ok(settings)
}

/// Uses `path` if given, otherwise `settings.json`. A missing file yields the
/// defaults; a file that exists but does not parse is an error.
pub fn load_settings_with_fallback(path: Option<&PathBuf>) -> Result<ServerSettings> {
    let path = path
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    if !settings_file_exists(&path) {
        return Ok(ServerSettings::default());
    }
    load_settings(&path)
}

/// Applies `HOST` and `PORT` from `lookup` on top of the loaded settings.
pub fn apply_env_overrides<F>(mut settings: ServerSettings, lookup: F) -> Result<ServerSettings>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST") {
        settings.host = host;
    }
    if let Some(port) = lookup("PORT") {
        settings.port = port
            .trim()
            .parse()
            .with_context(|| format!("Invalid PORT value: {port}"))?;
    }
    Ok(settings)
}

/// Checks if a settings file exists at the given path
pub fn settings_file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists() && path.as_ref().is_file()
}
