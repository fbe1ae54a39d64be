// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gallery]` - Gallery sources and cache warm-up
//! - `[lightbox]` - Overlay timings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("{} gallery sources", config.gallery.sources.len());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::lightbox::LightboxTimings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery contents and warm-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Path prefix joined in front of every entry of `sources`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_prefix: Option<String>,

    /// Ordered gallery sources. Ignored when a directory is given on the
    /// command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Number of leading items preloaded before the rest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_prefix: Option<usize>,
}

impl GalleryConfig {
    /// Visible prefix, clamped to the supported range.
    #[must_use]
    pub fn visible_prefix(&self) -> usize {
        self.visible_prefix
            .unwrap_or(DEFAULT_VISIBLE_PREFIX)
            .min(MAX_VISIBLE_PREFIX)
    }
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Exit transition length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_delay_ms: Option<u64>,

    /// Time a load error stays on screen in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_display_ms: Option<u64>,
}

impl LightboxConfig {
    /// Overlay timings with out-of-range values clamped.
    #[must_use]
    pub fn timings(&self) -> LightboxTimings {
        let close_delay = self
            .close_delay_ms
            .unwrap_or(DEFAULT_CLOSE_DELAY_MS)
            .min(MAX_CLOSE_DELAY_MS);
        let error_display = self
            .error_display_ms
            .unwrap_or(DEFAULT_ERROR_DISPLAY_MS)
            .clamp(MIN_ERROR_DISPLAY_MS, MAX_ERROR_DISPLAY_MS);
        LightboxTimings {
            close_delay: Duration::from_millis(close_delay),
            error_display: Duration::from_millis(error_display),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

/// Loads the configuration from the default location.
///
/// A missing file yields the defaults. An unreadable or invalid file also
/// yields the defaults, together with a warning describing the problem.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = paths::get_app_config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("{}: {err}; using defaults", path.display())),
        ),
    }
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.gallery.visible_prefix(), DEFAULT_VISIBLE_PREFIX);
        assert_eq!(config.lightbox.timings(), LightboxTimings::default());
        assert!(config.general.language.is_none());
    }

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[general]
language = "fr"

[gallery]
asset_prefix = "assets/projects"
sources = ["01.jpg", "02.mp4"]
visible_prefix = 3

[lightbox]
close_delay_ms = 150
error_display_ms = 4000
"#,
        )
        .expect("failed to write config");

        let config = load_from_path(&path).expect("config should parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.gallery.sources, vec!["01.jpg", "02.mp4"]);
        assert_eq!(config.gallery.visible_prefix(), 3);
        let timings = config.lightbox.timings();
        assert_eq!(timings.close_delay, Duration::from_millis(150));
        assert_eq!(timings.error_display, Duration::from_millis(4000));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("failed to write config");

        let config = load_from_path(&path).expect("config should parse");
        assert_eq!(config.gallery, GalleryConfig::default());
        assert_eq!(config.lightbox, LightboxConfig::default());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let lightbox = LightboxConfig {
            close_delay_ms: Some(60_000),
            error_display_ms: Some(1),
        };
        let timings = lightbox.timings();
        assert_eq!(timings.close_delay, Duration::from_millis(MAX_CLOSE_DELAY_MS));
        assert_eq!(timings.error_display, Duration::from_millis(MIN_ERROR_DISPLAY_MS));

        let gallery = GalleryConfig {
            visible_prefix: Some(10_000),
            ..Default::default()
        };
        assert_eq!(gallery.visible_prefix(), MAX_VISIBLE_PREFIX);
    }
}
