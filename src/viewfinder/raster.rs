// SPDX-License-Identifier: MPL-2.0
//! CPU raster surface backed by a `tiny_skia::Pixmap`.
//!
//! Used for headless rendering (PNG export, previews composited over a still
//! frame) and for pixel-level tests of the overlay.

use super::color::Rgba;
use super::geometry::Rect;
use super::surface::DrawSurface;
use crate::error::{Error, Result};
use image_rs::{imageops, RgbaImage};
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Cubic Bezier handle length approximating a quarter ellipse.
const KAPPA: f32 = 0.552_284_8;

pub struct PixmapSurface {
    pixmap: Pixmap,
    anti_alias: bool,
}

impl PixmapSurface {
    /// Allocates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::Image(format!("Failed to allocate {}x{} pixmap", width, height))
        })?;
        Ok(Self {
            pixmap,
            anti_alias: true,
        })
    }

    /// Toggles edge anti-aliasing for subsequent fills.
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Replaces every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.pixmap.fill(color.into());
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha color at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Straight-alpha copy of the surface.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let bytes = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        // Length is width * height * 4 by construction.
        RgbaImage::from_raw(self.width(), self.height(), bytes).unwrap_or_default()
    }

    /// Blends the surface over `background`, stretched to the surface size.
    pub fn composite_over(&self, background: &RgbaImage) -> RgbaImage {
        let mut base = if background.dimensions() == (self.width(), self.height()) {
            background.clone()
        } else {
            imageops::resize(
                background,
                self.width(),
                self.height(),
                imageops::FilterType::Triangle,
            )
        };
        imageops::overlay(&mut base, &self.to_rgba_image(), 0, 0);
        base
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| Error::Image(e.to_string()))
    }

    fn paint(&self, color: Rgba) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = self.anti_alias;
        paint
    }
}

/// Rounded rectangle outline; radii are clamped to half the rect extent.
fn round_rect_path(rect: Rect, rx: f32, ry: f32) -> Option<tiny_skia::Path> {
    let rx = rx.min(rect.width() / 2.0);
    let ry = ry.min(rect.height() / 2.0);
    let (l, t, r, b) = (rect.left, rect.top, rect.right, rect.bottom);
    let (kx, ky) = (rx * KAPPA, ry * KAPPA);

    let mut pb = PathBuilder::new();
    pb.move_to(l + rx, t);
    pb.line_to(r - rx, t);
    pb.cubic_to(r - rx + kx, t, r, t + ry - ky, r, t + ry);
    pb.line_to(r, b - ry);
    pb.cubic_to(r, b - ry + ky, r - rx + kx, b, r - rx, b);
    pb.line_to(l + rx, b);
    pb.cubic_to(l + rx - kx, b, l, b - ry + ky, l, b - ry);
    pb.line_to(l, t + ry);
    pb.cubic_to(l, t + ry - ky, l + rx - kx, t, l + rx, t);
    pb.close();
    pb.finish()
}

impl DrawSurface for PixmapSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        let Some(r) = tiny_skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
        else {
            return;
        };
        let paint = self.paint(color);
        self.pixmap.fill_rect(r, &paint, Transform::identity(), None);
    }

    fn fill_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        if rx <= 0.0 || ry <= 0.0 {
            self.fill_rect(rect, color);
            return;
        }
        let Some(path) = round_rect_path(rect, rx, ry) else {
            return;
        };
        let paint = self.paint(color);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(matches!(PixmapSurface::new(0, 10), Err(Error::Image(_))));
    }

    #[test]
    fn fill_rect_covers_interior_only() {
        let mut surface = PixmapSurface::new(10, 10).expect("pixmap").with_anti_alias(false);
        surface.fill_rect(Rect::new(2.0, 2.0, 5.0, 5.0), Rgba::WHITE);

        assert_eq!(surface.pixel(3, 3), Some(Rgba::WHITE));
        assert_eq!(surface.pixel(6, 6), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn rounded_rect_leaves_corners_open() {
        let mut surface = PixmapSurface::new(20, 20).expect("pixmap").with_anti_alias(false);
        surface.fill_round_rect(Rect::new(0.0, 0.0, 20.0, 20.0), 8.0, 8.0, Rgba::WHITE);

        assert_eq!(surface.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(surface.pixel(10, 10), Some(Rgba::WHITE));
        assert_eq!(surface.pixel(10, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn zero_radius_falls_back_to_square() {
        let mut surface = PixmapSurface::new(10, 10).expect("pixmap").with_anti_alias(false);
        surface.fill_round_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 3.0, Rgba::WHITE);
        assert_eq!(surface.pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn translucent_fill_keeps_alpha() {
        let mut surface = PixmapSurface::new(4, 4).expect("pixmap").with_anti_alias(false);
        let shade = Rgba::BLACK.with_alpha(128);
        surface.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), shade);
        assert_eq!(surface.pixel(1, 1).map(|c| c.a), Some(128));
    }

    #[test]
    fn composite_over_resizes_background() {
        let mut surface = PixmapSurface::new(8, 8).expect("pixmap").with_anti_alias(false);
        surface.fill_rect(Rect::new(0.0, 0.0, 4.0, 8.0), Rgba::BLACK);

        let background = RgbaImage::from_pixel(2, 2, image_rs::Rgba([255, 0, 0, 255]));
        let out = surface.composite_over(&background);

        assert_eq!(out.dimensions(), (8, 8));
        assert_eq!(out.get_pixel(1, 1).0, [0, 0, 0, 255]);
        assert_eq!(out.get_pixel(6, 6).0, [255, 0, 0, 255]);
    }
}
