// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[proxy]` - CORS passthrough service
//! - `[load]` - Cross-origin mode of the direct and proxied attempts
//! - `[widget]` - Element id and diagnostics buffer size
//! - `[defaults]` - Initial settings, in the same shape as a host update
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, then `IMAGE_DISPLAY_CONFIG_DIR`, then
//! the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use image_display::config;
//!
//! // Missing or broken files yield defaults; broken ones also a warning.
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let settings = config.initial_settings();
//! assert!(settings.has_url());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::application::port::CrossOrigin;
use crate::diagnostics::BufferCapacity;
use crate::error::Result;
use crate::proxy::ProxyRewriter;
use crate::settings::{Settings, SettingsPatch};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// CORS proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyConfig {
    /// Prefix the percent-encoded image URL is appended to.
    #[serde(default = "default_proxy_base_url")]
    pub base_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: default_proxy_base_url(),
        }
    }
}

/// Request policy for the two attempts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadConfig {
    #[serde(default = "default_direct_cross_origin")]
    pub direct_cross_origin: CrossOrigin,

    #[serde(default = "default_proxy_cross_origin")]
    pub proxy_cross_origin: CrossOrigin,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            direct_cross_origin: DEFAULT_DIRECT_CROSS_ORIGIN,
            proxy_cross_origin: DEFAULT_PROXY_CROSS_ORIGIN,
        }
    }
}

/// Widget identity and tracing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetConfig {
    /// Id of the image element; keys the hover rule.
    #[serde(default = "default_element_id")]
    pub element_id: String,

    /// Number of diagnostic events kept in memory.
    #[serde(default = "default_diagnostics_capacity")]
    pub diagnostics_capacity: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            element_id: default_element_id(),
            diagnostics_capacity: DEFAULT_DIAGNOSTICS_CAPACITY,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub load: LoadConfig,

    #[serde(default)]
    pub widget: WidgetConfig,

    /// Overrides of the built-in settings, active until the first host update.
    #[serde(default, skip_serializing_if = "SettingsPatch::is_empty")]
    pub defaults: SettingsPatch,
}

impl Config {
    /// Built-in defaults with the `[defaults]` section applied.
    #[must_use]
    pub fn initial_settings(&self) -> Settings {
        Settings::default().merged(&self.defaults)
    }

    /// Proxy rewriter for the configured base. A blank base falls back to
    /// the default service.
    #[must_use]
    pub fn proxy_rewriter(&self) -> ProxyRewriter {
        let base = self.proxy.base_url.trim();
        if base.is_empty() {
            log::warn!("Empty proxy base_url, using {DEFAULT_PROXY_BASE_URL}");
            return ProxyRewriter::default();
        }
        ProxyRewriter::new(base)
    }

    /// Element id, falling back to the default when blank.
    #[must_use]
    pub fn element_id(&self) -> &str {
        let id = self.widget.element_id.trim();
        if id.is_empty() {
            DEFAULT_ELEMENT_ID
        } else {
            id
        }
    }

    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.widget.diagnostics_capacity)
    }
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_proxy_base_url() -> String {
    DEFAULT_PROXY_BASE_URL.to_string()
}

fn default_direct_cross_origin() -> CrossOrigin {
    DEFAULT_DIRECT_CROSS_ORIGIN
}

fn default_proxy_cross_origin() -> CrossOrigin {
    DEFAULT_PROXY_CROSS_ORIGIN
}

fn default_element_id() -> String {
    DEFAULT_ELEMENT_ID.to_string()
}

fn default_diagnostics_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_CAPACITY
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or invalid file yields the defaults and
/// a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir/settings.toml` when given.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("Falling back to default config: {err}");
                    return (
                        Config::default(),
                        Some(format!("Could not load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads the configuration from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to `base_dir/settings.toml` when given.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves the configuration to an explicit file, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
