// SPDX-License-Identifier: MPL-2.0
//! Viewfinder styling loaded from a `viewfinder.toml` file.
//!
//! # Configuration Sections
//!
//! - `[viewfinder]` - Finder size, margin and bracket shape in dp, plus colors
//! - `[display]` - Display density used to convert dp to pixels
//!
//! Colors are written as `"#RRGGBB"` or `"#RRGGBBAA"`.
//!
//! # Examples
//!
//! ```no_run
//! use camera_viewfinder::config::{self, StyleConfig};
//!
//! // Load the style (returns tuple with optional warning)
//! let (style, _warning) = config::load();
//!
//! // Resolve it to pixels for the overlay
//! let viewfinder = style.resolve().expect("style fits in pixels");
//! assert!(viewfinder.finder_size > 0);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::viewfinder::{Rgba, ViewfinderConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "viewfinder.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Viewfinder shape and colors, dimensions in dp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewfinderStyle {
    pub finder_size: u32,
    pub corner_length: u32,
    pub corner_thickness: u32,
    pub corner_color: Rgba,
    pub shadow_color: Rgba,
    pub margin_bottom: i32,
}

impl Default for ViewfinderStyle {
    fn default() -> Self {
        Self {
            finder_size: DEFAULT_FINDER_SIZE_DP,
            corner_length: DEFAULT_CORNER_LENGTH_DP,
            corner_thickness: DEFAULT_CORNER_THICKNESS_DP,
            corner_color: DEFAULT_CORNER_COLOR,
            shadow_color: DEFAULT_SHADOW_COLOR,
            margin_bottom: DEFAULT_FINDER_BOTTOM_MARGIN_DP,
        }
    }
}

/// Display properties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Physical pixels per dp.
    #[serde(default = "default_density")]
    pub density: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
        }
    }
}

fn default_density() -> f32 {
    DEFAULT_DENSITY
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct StyleConfig {
    #[serde(default)]
    pub viewfinder: ViewfinderStyle,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl StyleConfig {
    /// Density clamped to the supported range.
    pub fn density(&self) -> f32 {
        if self.display.density.is_finite() {
            self.display.density.clamp(MIN_DENSITY, MAX_DENSITY)
        } else {
            DEFAULT_DENSITY
        }
    }

    /// Converts the dp style to a pixel configuration.
    ///
    /// Fails with [`Error::Config`] when a dimension does not fit the pixel
    /// range at the current density.
    pub fn resolve(&self) -> Result<ViewfinderConfig> {
        let density = self.density();
        let style = &self.viewfinder;
        let size = |field: &str, dp: u32| {
            dp_to_px(dp, density).ok_or_else(|| out_of_range(field, i64::from(dp), density))
        };

        Ok(ViewfinderConfig {
            finder_size: size("finder_size", style.finder_size)?,
            corner_length: size("corner_length", style.corner_length)?,
            corner_thickness: size("corner_thickness", style.corner_thickness)?,
            corner_color: style.corner_color,
            shadow_color: style.shadow_color,
            margin_bottom: signed_dp_to_px(style.margin_bottom, density).ok_or_else(|| {
                out_of_range("margin_bottom", i64::from(style.margin_bottom), density)
            })?,
        })
    }
}

fn out_of_range(field: &str, dp: i64, density: f32) -> Error {
    Error::Config(format!(
        "{field} = {dp} dp does not fit in pixels at density {density}"
    ))
}

/// Rounds `dp × density` to whole pixels; a non-zero size never collapses
/// to zero. `None` when the result exceeds `u32`.
pub fn dp_to_px(dp: u32, density: f32) -> Option<u32> {
    if dp == 0 {
        return Some(0);
    }
    let px = (f64::from(dp) * f64::from(density)).round().max(1.0);
    (px <= f64::from(u32::MAX)).then_some(px as u32)
}

/// Signed variant of [`dp_to_px`]; `None` when the result exceeds `i32`.
pub fn signed_dp_to_px(dp: i32, density: f32) -> Option<i32> {
    if dp == 0 {
        return Some(0);
    }
    let px = (f64::from(dp) * f64::from(density)).round();
    let px = if px == 0.0 { f64::from(dp.signum()) } else { px };
    (f64::from(i32::MIN)..=f64::from(i32::MAX))
        .contains(&px)
        .then_some(px as i32)
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

/// Loads the style from the default location.
///
/// Returns a tuple of (style, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults and a warning.
pub fn load() -> (StyleConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the style from `viewfinder.toml` inside a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (StyleConfig, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(style) => return (style, None),
                Err(err) => {
                    let warning = format!("Ignoring {}: {}", path.display(), err);
                    log::warn!("{}", warning);
                    return (StyleConfig::default(), Some(warning));
                }
            }
        }
    }
    (StyleConfig::default(), None)
}

/// Loads a style from a specific file.
pub fn load_from_path(path: &Path) -> Result<StyleConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes the style to `path`, creating parent directories.
pub fn save_to_path(style: &StyleConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(style)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewfinder::ViewfinderOverlay;
    use tempfile::tempdir;

    #[test]
    fn defaults_resolve_to_dp_values_at_unit_density() {
        let config = StyleConfig::default().resolve().expect("defaults fit");
        assert_eq!(config, ViewfinderConfig::default());
        assert_eq!(config.finder_size, 285);
        assert_eq!(config.corner_length, 30);
        assert_eq!(config.corner_thickness, 4);
        assert_eq!(config.corner_color, Rgba::WHITE);
        assert!(config.shadow_color.is_transparent());
    }

    #[test]
    fn resolve_scales_by_density() {
        let mut style = StyleConfig::default();
        style.display.density = 2.75;
        style.viewfinder.margin_bottom = -10;

        let config = style.resolve().expect("fits");
        assert_eq!(config.finder_size, 784);
        assert_eq!(config.corner_length, 83);
        assert_eq!(config.corner_thickness, 11);
        assert_eq!(config.margin_bottom, -28);
    }

    #[test]
    fn dp_to_px_never_collapses_non_zero_sizes() {
        assert_eq!(dp_to_px(1, 0.1), Some(1));
        assert_eq!(dp_to_px(0, 3.0), Some(0));
        assert_eq!(signed_dp_to_px(-1, 0.1), Some(-1));
        assert_eq!(signed_dp_to_px(1, 0.1), Some(1));
    }

    #[test]
    fn signed_conversion_rounds_symmetrically() {
        assert_eq!(signed_dp_to_px(-10, 2.75), Some(-28));
        assert_eq!(signed_dp_to_px(10, 2.75), Some(28));
        assert_eq!(signed_dp_to_px(i32::MIN, 1.0), Some(i32::MIN));
        assert_eq!(signed_dp_to_px(i32::MIN, 2.0), None);
        assert_eq!(dp_to_px(u32::MAX, 2.0), None);
    }

    #[test]
    fn huge_upward_margin_is_rejected_not_wrapped() {
        let mut style = StyleConfig::default();
        style.viewfinder.finder_size = 100;
        style.viewfinder.margin_bottom = 600_000_000;
        style.display.density = 8.0;

        match style.resolve() {
            Err(Error::Config(message)) => assert!(message.contains("margin_bottom")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn most_negative_margin_resolves_and_fails_layout() {
        let style: StyleConfig =
            toml::from_str("[viewfinder]\nmargin_bottom = -2147483648").expect("valid toml");

        let config = style.resolve().expect("fits at unit density");
        assert_eq!(config.margin_bottom, i32::MIN);

        let mut overlay = ViewfinderOverlay::new(config);
        assert!(overlay.measure(1080, 1920).is_err());
    }

    #[test]
    fn oversized_finder_is_a_config_error() {
        let mut style = StyleConfig::default();
        style.viewfinder.finder_size = u32::MAX;
        style.display.density = 2.0;

        assert!(matches!(style.resolve(), Err(Error::Config(_))));
    }

    #[test]
    fn out_of_range_density_is_clamped() {
        let mut style = StyleConfig::default();
        style.display.density = 100.0;
        assert_eq!(style.density(), MAX_DENSITY);
        style.display.density = f32::NAN;
        assert_eq!(style.density(), DEFAULT_DENSITY);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let style: StyleConfig = toml::from_str(
            r##"
            [viewfinder]
            finder_size = 200
            shadow_color = "#00000099"
            "##,
        )
        .expect("valid toml");

        assert_eq!(style.viewfinder.finder_size, 200);
        assert_eq!(style.viewfinder.shadow_color, Rgba::new(0, 0, 0, 0x99));
        assert_eq!(style.viewfinder.corner_length, DEFAULT_CORNER_LENGTH_DP);
        assert_eq!(style.display.density, DEFAULT_DENSITY);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut style = StyleConfig::default();
        style.viewfinder.corner_color = Rgba::new(0, 200, 83, 255);
        style.viewfinder.margin_bottom = 40;
        style.display.density = 3.0;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&style, &path).expect("failed to save style");
        let loaded = load_from_path(&path).expect("failed to load style");
        assert_eq!(loaded, style);
    }

    #[test]
    fn invalid_color_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[viewfinder]\ncorner_color = \"white\"\n").expect("write");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (style, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(style, StyleConfig::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (style, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(style, StyleConfig::default());
        assert!(warning.is_none());
    }
}
