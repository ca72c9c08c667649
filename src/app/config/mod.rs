// SPDX-License-Identifier: MPL-2.0
//! User settings persisted as `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [api]
//! base_url = "https://admin.example.com"
//! request_timeout_secs = 30
//!
//! [viewer]
//! image_cache_capacity = 64
//! ```
//!
//! Every key is optional. A missing file is not an error; a file that
//! cannot be read or parsed is replaced by defaults and reported once
//! through a warning toast.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the toast shown when the file exists but is unusable.
const LOAD_WARNING: &str = "notification-config-load-error";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub viewer: ViewerConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Locale tag such as `en-US` or `fr`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Absent means requests never time out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        let secs = self.request_timeout_secs?;
        Some(Duration::from_secs(secs.clamp(1, MAX_REQUEST_TIMEOUT_SECS)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Decoded images kept in memory.
    pub image_cache_capacity: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_cache_capacity: DEFAULT_IMAGE_CACHE_CAPACITY,
        }
    }
}

impl ViewerConfig {
    pub fn clamped_cache_capacity(&self) -> usize {
        self.image_cache_capacity
            .clamp(MIN_IMAGE_CACHE_CAPACITY, MAX_IMAGE_CACHE_CAPACITY)
    }
}

fn theme_mode_any_case<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<ThemeMode, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        _ => Err(serde::de::Error::unknown_variant(&raw, &["light", "dark", "system"])),
    }
}

/// Backend base URL: `--api-url`, then `$GALLERY_ADMIN_API_URL`, then
/// `[api] base_url`, then [`DEFAULT_API_BASE_URL`]. Blank values are skipped.
pub fn resolve_api_base_url(cli: Option<&str>, config: &Config) -> String {
    let env = std::env::var(ENV_API_URL).ok();
    pick_base_url(cli, env.as_deref(), config)
}

fn pick_base_url(cli: Option<&str>, env: Option<&str>, config: &Config) -> String {
    [cli, env, config.api.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_owned()
}

fn settings_path(dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Reads the settings from the resolved config directory.
///
/// The second element is the i18n key of a warning to surface when the
/// file existed but had to be ignored.
pub fn load() -> (Config, Option<String>) {
    load_from_dir(None)
}

fn load_from_dir(dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_path(dir) else {
        tracing::debug!("no config directory on this platform, using defaults");
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "settings ignored, using defaults");
            (Config::default(), Some(LOAD_WARNING.to_owned()))
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Writes the settings to the resolved config directory. Does nothing
/// when no directory can be determined.
pub fn save(config: &Config) -> Result<()> {
    save_to_dir(config, None)
}

fn save_to_dir(config: &Config, dir: Option<PathBuf>) -> Result<()> {
    match settings_path(dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, text)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
