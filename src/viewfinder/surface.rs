// SPDX-License-Identifier: MPL-2.0
//! Drawing primitives the viewfinder needs from its host canvas.

use super::color::Rgba;
use super::geometry::Rect;

/// Immediate-mode 2D target.
///
/// Implementations fill in parent coordinates with source-over blending.
pub trait DrawSurface {
    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fills a rectangle with elliptical corners of radii `rx` × `ry`.
    fn fill_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, color: Rgba);
}
