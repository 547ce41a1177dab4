// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! banner preferences to a `banners.toml` file.
//!
//! Every field is optional; anything missing or unparsable falls back to the
//! values in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_banners::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.banner.position = Some("bottom-right".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("banners.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.banner.position, Some("bottom-right".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::banner::BannerOptions;
use crate::domain::banner::{ExitType, Idiom, Position};
use crate::error::Result;
use iced::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "banners.toml";
const APP_NAME: &str = "IcedBanners";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Device class, `"phone"` or `"tablet"`.
    #[serde(default)]
    pub idiom: Option<String>,
    #[serde(default)]
    pub window_width: Option<f32>,
    #[serde(default)]
    pub window_height: Option<f32>,
    #[serde(default)]
    pub banner: BannerSection,
}

/// `[banner]` table: overrides for the default banner options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerSection {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub exit_type: Option<String>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub fade_in_secs: Option<f32>,
    #[serde(default)]
    pub fade_out_secs: Option<f32>,
    #[serde(default)]
    pub show_animation_secs: Option<f32>,
    #[serde(default)]
    pub hide_animation_secs: Option<f32>,
    #[serde(default)]
    pub seconds_to_show: Option<f32>,
    #[serde(default)]
    pub view_opacity: Option<f32>,
    #[serde(default)]
    pub allow_tap_to_dismiss: Option<bool>,
}

impl Config {
    /// Returns the configured device idiom, falling back to phone.
    #[must_use]
    pub fn idiom(&self) -> Idiom {
        self.idiom
            .as_deref()
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the overlay window size, if both dimensions are set and positive.
    #[must_use]
    pub fn window_size(&self) -> Option<Size> {
        match (self.window_width, self.window_height) {
            (Some(width), Some(height)) if width > 0.0 && height > 0.0 => {
                Some(Size::new(width, height))
            }
            _ => None,
        }
    }

    /// Builds the default options for new banners: idiom defaults with the
    /// `[banner]` overrides applied.
    #[must_use]
    pub fn banner_options(&self) -> BannerOptions {
        let section = &self.banner;
        let mut options = BannerOptions::for_idiom(self.idiom());

        if let Some(position) = section.position.as_deref().and_then(|p| p.parse::<Position>().ok()) {
            options = options.with_position(position);
        }
        if let Some(exit) = section.exit_type.as_deref().and_then(|e| e.parse::<ExitType>().ok()) {
            options = options.with_exit_type(exit);
        }
        if let Some(width) = positive(section.width) {
            options = options.with_width(width);
        }
        if let Some(height) = positive(section.height) {
            options = options.with_height(height);
        }
        if let Some(duration) = seconds(section.fade_in_secs) {
            options = options.with_fade_in_duration(duration);
        }
        if let Some(duration) = seconds(section.fade_out_secs) {
            options = options.with_fade_out_duration(duration);
        }
        if let Some(duration) = seconds(section.show_animation_secs) {
            options = options.with_show_animation_duration(duration);
        }
        if let Some(duration) = seconds(section.hide_animation_secs) {
            options = options.with_hide_animation_duration(duration);
        }
        if let Some(secs) = section.seconds_to_show.filter(|s| s.is_finite()) {
            let clamped = secs.clamp(defaults::MIN_SECONDS_TO_SHOW, defaults::MAX_SECONDS_TO_SHOW);
            options = options.with_seconds_to_show(Duration::from_secs_f32(clamped));
        }
        if let Some(opacity) = section.view_opacity {
            options = options.with_view_opacity(opacity);
        }
        if let Some(allow) = section.allow_tap_to_dismiss {
            options = options.with_tap_to_dismiss(allow);
        }
        options
    }
}

fn positive(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Rejects negative, NaN and out-of-range values instead of panicking.
fn seconds(value: Option<f32>) -> Option<Duration> {
    value.and_then(|v| Duration::try_from_secs_f32(v).ok())
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid banner config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_banner_section() {
        let config = Config {
            idiom: Some("tablet".to_string()),
            window_width: Some(1024.0),
            window_height: Some(768.0),
            banner: BannerSection {
                position: Some("bottom-left".to_string()),
                seconds_to_show: Some(6.0),
                ..BannerSection::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("banners.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("banners.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn banner_options_apply_overrides() {
        let config = Config {
            banner: BannerSection {
                position: Some("bottom-right".to_string()),
                exit_type: Some("pop".to_string()),
                height: Some(64.0),
                seconds_to_show: Some(500.0),
                allow_tap_to_dismiss: Some(false),
                ..BannerSection::default()
            },
            ..Config::default()
        };

        let options = config.banner_options();
        assert_eq!(options.position(), Position::BottomRight);
        assert_eq!(options.exit_type(), ExitType::Pop);
        assert_eq!(options.size().height, 64.0);
        assert_eq!(
            options.seconds_to_show(),
            Some(Duration::from_secs_f32(defaults::MAX_SECONDS_TO_SHOW))
        );
        assert!(!options.allows_tap_to_dismiss());
    }

    #[test]
    fn unparsable_overrides_are_ignored() {
        let config = Config {
            banner: BannerSection {
                position: Some("middle".to_string()),
                width: Some(-5.0),
                ..BannerSection::default()
            },
            ..Config::default()
        };

        let options = config.banner_options();
        assert_eq!(options.position(), Position::TopCenter);
        assert_eq!(options.size().width, defaults::PHONE_WIDTH);
    }

    #[test]
    fn out_of_range_durations_fall_back_to_defaults() {
        let config = Config {
            banner: BannerSection {
                fade_in_secs: Some(1e30),
                fade_out_secs: Some(f32::NAN),
                show_animation_secs: Some(-1.0),
                hide_animation_secs: Some(f32::INFINITY),
                seconds_to_show: Some(1e30),
                ..BannerSection::default()
            },
            ..Config::default()
        };

        let options = config.banner_options();
        let fallback = BannerOptions::default();
        assert_eq!(options.fade_in_duration(), fallback.fade_in_duration());
        assert_eq!(options.fade_out_duration(), fallback.fade_out_duration());
        assert_eq!(
            options.show_animation_duration(),
            fallback.show_animation_duration()
        );
        assert_eq!(
            options.hide_animation_duration(),
            fallback.hide_animation_duration()
        );
        assert_eq!(
            options.seconds_to_show(),
            Some(Duration::from_secs_f32(defaults::MAX_SECONDS_TO_SHOW))
        );
    }

    #[test]
    fn tablet_idiom_uses_larger_defaults() {
        let config = Config {
            idiom: Some("tablet".to_string()),
            ..Config::default()
        };
        assert_eq!(config.idiom(), Idiom::Tablet);
        assert_eq!(config.banner_options().size().width, defaults::TABLET_WIDTH);
    }

    #[test]
    fn window_size_requires_both_dimensions() {
        let mut config = Config {
            window_width: Some(800.0),
            ..Config::default()
        };
        assert!(config.window_size().is_none());

        config.window_height = Some(600.0);
        assert_eq!(config.window_size(), Some(Size::new(800.0, 600.0)));
    }
}
