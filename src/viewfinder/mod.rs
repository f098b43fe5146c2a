// SPDX-License-Identifier: MPL-2.0
//! Camera viewfinder overlay.
//!
//! The overlay places a square crop window over a camera preview, shades the
//! area around it and marks its corners with L-shaped brackets. It is driven
//! by two host callbacks:
//!
//! - [`ViewfinderOverlay::measure`] on every layout pass, with the parent's
//!   size. The overlay always occupies the whole parent.
//! - [`ViewfinderOverlay::render`] on every repaint, with any [`DrawSurface`].
//!
//! # Examples
//!
//! ```
//! use camera_viewfinder::viewfinder::{Rect, ViewfinderConfig, ViewfinderOverlay};
//! use camera_viewfinder::viewfinder::recorder::RecordingSurface;
//!
//! let mut overlay = ViewfinderOverlay::new(ViewfinderConfig::default());
//! let rect = overlay.measure(1000, 1000).unwrap();
//! assert_eq!(rect, Rect::new(357.5, 357.5, 642.5, 642.5));
//!
//! let mut surface = RecordingSurface::new();
//! overlay.render(&mut surface);
//! assert_eq!(surface.ops().len(), 4 + 4 * 3);
//! ```

pub mod color;
pub mod geometry;
pub mod raster;
pub mod recorder;
pub mod surface;

pub use color::Rgba;
pub use geometry::{Bracket, Corner, Rect, ViewfinderRect};
pub use surface::DrawSurface;

use crate::config::defaults::{
    DEFAULT_CORNER_COLOR, DEFAULT_CORNER_LENGTH_DP, DEFAULT_CORNER_THICKNESS_DP,
    DEFAULT_FINDER_BOTTOM_MARGIN_DP, DEFAULT_FINDER_SIZE_DP, DEFAULT_SHADOW_COLOR,
};
use crate::error::ConfigurationError;

/// Resolved viewfinder parameters, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewfinderConfig {
    /// Side of the square finder window.
    pub finder_size: u32,
    /// Reach of each bracket bar along the finder edge.
    pub corner_length: u32,
    /// Width of the bracket bars.
    pub corner_thickness: u32,
    pub corner_color: Rgba,
    pub shadow_color: Rgba,
    /// Upward shift of the finder from the vertical center. Negative values
    /// shift it down.
    pub margin_bottom: i32,
}

impl Default for ViewfinderConfig {
    /// Defaults at a density of one pixel per dp.
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

/// The viewfinder component: configuration plus the geometry of the last
/// successful layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewfinderOverlay {
    config: ViewfinderConfig,
    rect: ViewfinderRect,
    parent_width: f32,
    parent_height: f32,
}

impl ViewfinderOverlay {
    pub fn new(config: ViewfinderConfig) -> Self {
        Self {
            config,
            rect: Rect::ZERO,
            parent_width: 0.0,
            parent_height: 0.0,
        }
    }

    pub fn config(&self) -> &ViewfinderConfig {
        &self.config
    }

    /// Current crop window. Zero-sized until the first successful
    /// [`measure`](Self::measure).
    pub fn rect(&self) -> ViewfinderRect {
        self.rect
    }

    /// Bounds the overlay occupies, i.e. the last measured parent size.
    pub fn parent_size(&self) -> (f32, f32) {
        (self.parent_width, self.parent_height)
    }

    /// Lays the overlay out over a parent of the given size.
    ///
    /// On error the previous layout is kept untouched.
    pub fn measure(
        &mut self,
        parent_width: u32,
        parent_height: u32,
    ) -> Result<ViewfinderRect, ConfigurationError> {
        let rect = geometry::place_finder(
            parent_width,
            parent_height,
            self.config.finder_size,
            self.config.margin_bottom,
        )?;

        self.parent_width = parent_width as f32;
        self.parent_height = parent_height as f32;
        self.rect = rect;
        log::debug!(
            "viewfinder measured in {}x{}: {:?}",
            parent_width,
            parent_height,
            rect
        );
        Ok(rect)
    }

    /// Draws the shaded surround, then the four corner brackets.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        self.draw_shaded_area(surface);
        self.draw_corners(surface);
    }

    fn draw_shaded_area<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let color = self.config.shadow_color;
        for strip in geometry::shaded_strips(&self.rect, self.parent_width, self.parent_height) {
            surface.fill_rect(strip, color);
        }
    }

    fn draw_corners<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let color = self.config.corner_color;
        let length = self.config.corner_length as f32;
        let thickness = self.config.corner_thickness as f32;
        let radius = thickness / 2.0;

        for bracket in geometry::brackets(&self.rect, length, thickness) {
            surface.fill_round_rect(bracket.vertical, radius, radius, color);
            surface.fill_round_rect(bracket.horizontal, radius, radius, color);
            surface.fill_rect(bracket.joint, color);
        }
    }
}
