// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery configuration, loading and saving
//! per-instance settings from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Downloads, outside-click closing, initial image
//! - `[keyboard]` - Key code remapping
//! - `[description]` - Caption labels
//! - `[buttons]` - Toolbar visibility forwarded to the renderer
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `GALLERY_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config::{self, Config};
//! use gallery_lens::domain::gallery::DescriptionFormat;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.gallery.downloadable = Some(true);
//! config::save(&config).expect("Failed to save config");
//!
//! let options = config.gallery_options(DescriptionFormat::default());
//! assert!(options.downloadable);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::application::GalleryOptions;
use crate::domain::gallery::{
    ButtonsConfig, DescriptionFormat, DescriptionOverrides, KeyCode, KeyboardRemap,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Enables saving the current image.
    #[serde(default = "default_downloadable", skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,

    /// Closes the viewer on backdrop clicks.
    #[serde(
        default = "default_close_on_outside_click",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_on_outside_click: Option<bool>,

    /// Image to open directly once data is ready. Negative values keep the
    /// gallery strip as landing view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_pointer: Option<i64>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            downloadable: default_downloadable(),
            close_on_outside_click: default_close_on_outside_click(),
            initial_pointer: None,
        }
    }
}

/// Key code overrides. Unset keys keep their defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct KeyboardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esc: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
}

/// Caption labels. Unset labels come from the active locale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DescriptionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_text_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_full_description: Option<String>,
}

/// Toolbar visibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonsSection {
    #[serde(default = "default_show_download")]
    pub download: bool,
    #[serde(default = "default_show_ext_url")]
    pub ext_url: bool,
    #[serde(default = "default_show_close")]
    pub close: bool,
}

impl Default for ButtonsSection {
    fn default() -> Self {
        Self {
            download: DEFAULT_SHOW_DOWNLOAD_BUTTON,
            ext_url: DEFAULT_SHOW_EXT_URL_BUTTON,
            close: DEFAULT_SHOW_CLOSE_BUTTON,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Gallery configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub keyboard: KeyboardConfig,

    #[serde(default)]
    pub description: DescriptionConfig,

    #[serde(default)]
    pub buttons: ButtonsSection,
}

impl Config {
    /// Resolves the runtime options of a gallery instance.
    ///
    /// Caption labels missing from the file are taken from
    /// `description_defaults`, usually
    /// [`I18n::description_defaults`](crate::i18n::fluent::I18n::description_defaults).
    #[must_use]
    pub fn gallery_options(&self, description_defaults: DescriptionFormat) -> GalleryOptions {
        let description = DescriptionOverrides {
            image_text: self.description.image_text.clone(),
            number_separator: self.description.number_separator.clone(),
            before_text_description: self.description.before_text_description.clone(),
            custom_full_description: self.description.custom_full_description.clone(),
        }
        .fill(description_defaults);

        GalleryOptions {
            downloadable: self.gallery.downloadable.unwrap_or(DEFAULT_DOWNLOADABLE),
            close_on_outside_click: self
                .gallery
                .close_on_outside_click
                .unwrap_or(DEFAULT_CLOSE_ON_OUTSIDE_CLICK),
            image_pointer: self
                .gallery
                .initial_pointer
                .and_then(|pointer| usize::try_from(pointer).ok()),
            keyboard: KeyboardRemap {
                esc: self.keyboard.esc.map(KeyCode),
                left: self.keyboard.left.map(KeyCode),
                right: self.keyboard.right.map(KeyCode),
            },
            description,
            buttons: ButtonsConfig {
                download: self.buttons.download,
                ext_url: self.buttons.ext_url,
                close: self.buttons.close,
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_downloadable() -> Option<bool> {
    Some(DEFAULT_DOWNLOADABLE)
}

fn default_close_on_outside_click() -> Option<bool> {
    Some(DEFAULT_CLOSE_ON_OUTSIDE_CLICK)
}

fn default_show_download() -> bool {
    DEFAULT_SHOW_DOWNLOAD_BUTTON
}

fn default_show_ext_url() -> bool {
    DEFAULT_SHOW_EXT_URL_BUTTON
}

fn default_show_close() -> bool {
    DEFAULT_SHOW_CLOSE_BUTTON
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
