// SPDX-License-Identifier: MPL-2.0
//! Rectangle arithmetic for the viewfinder: placement of the finder window,
//! the shaded strips around it and the corner bracket pieces.

use crate::error::ConfigurationError;

/// Axis-aligned float rectangle in parent coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// The crop window drawn by the viewfinder.
pub type ViewfinderRect = Rect;

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Area of the rectangle; zero for inverted or degenerate rectangles.
    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Overlap of two rectangles, if they share a non-empty interior.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        );
        (!r.is_empty()).then_some(r)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Places the finder window inside a parent of the given size.
///
/// The window is centered horizontally and vertically, then shifted up by
/// `margin_bottom`. Fails when the shifted window would leave the parent's
/// vertical bounds.
pub fn place_finder(
    parent_width: u32,
    parent_height: u32,
    finder_size: u32,
    margin_bottom: i32,
) -> Result<ViewfinderRect, ConfigurationError> {
    let half_w = parent_width as f32 / 2.0;
    let height = parent_height as f32;
    let half_h = height / 2.0;
    let half_finder = finder_size as f32 / 2.0;
    let margin = margin_bottom as f32;

    let top = half_h - half_finder - margin;
    let bottom = half_h + half_finder - margin;
    if top < 0.0 || bottom >= height {
        return Err(ConfigurationError::MarginOutOfBounds {
            parent_height,
            finder_size,
            margin_bottom,
        });
    }

    Ok(Rect::new(half_w - half_finder, top, half_w + half_finder, bottom))
}

/// The four strips covering the parent outside `finder`, in draw order:
/// left, right, top, bottom.
///
/// Left and right strips span the finder's height only; top and bottom
/// strips span the full parent width.
pub fn shaded_strips(finder: &Rect, parent_width: f32, parent_height: f32) -> [Rect; 4] {
    [
        Rect::new(0.0, finder.top, finder.left, finder.bottom),
        Rect::new(finder.right, finder.top, parent_width, finder.bottom),
        Rect::new(0.0, 0.0, parent_width, finder.top),
        Rect::new(0.0, finder.bottom, parent_width, parent_height),
    ]
}

/// Corner of the finder window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Corner point on `rect`.
    pub fn point(self, rect: &Rect) -> (f32, f32) {
        match self {
            Corner::TopLeft => (rect.left, rect.top),
            Corner::TopRight => (rect.right, rect.top),
            Corner::BottomLeft => (rect.left, rect.bottom),
            Corner::BottomRight => (rect.right, rect.bottom),
        }
    }

    /// Unit direction pointing into the rectangle along each axis.
    fn inward(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (1.0, 1.0),
            Corner::TopRight => (-1.0, 1.0),
            Corner::BottomLeft => (1.0, -1.0),
            Corner::BottomRight => (-1.0, -1.0),
        }
    }
}

/// The three primitives forming one L-shaped corner bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub corner: Corner,
    /// Bar running along the vertical edge.
    pub vertical: Rect,
    /// Bar running along the horizontal edge.
    pub horizontal: Rect,
    /// Square covering the joint so the outer corner stays sharp.
    pub joint: Rect,
}

/// Builds a span from `origin` extending `inward` units in direction `dir`
/// and `outward` units the other way.
fn span(origin: f32, dir: f32, inward: f32, outward: f32) -> (f32, f32) {
    let a = origin - dir * outward;
    let b = origin + dir * inward;
    (a.min(b), a.max(b))
}

/// Computes the bracket at `corner`.
///
/// Both bars are `thickness` wide, centered on the finder edge, reach
/// `length` into the rectangle and overhang half the thickness outside it.
pub fn bracket(rect: &Rect, corner: Corner, length: f32, thickness: f32) -> Bracket {
    let half = thickness / 2.0;
    let (cx, cy) = corner.point(rect);
    let (dx, dy) = corner.inward();

    let (vy0, vy1) = span(cy, dy, length, half);
    let (hx0, hx1) = span(cx, dx, length, half);

    Bracket {
        corner,
        vertical: Rect::new(cx - half, vy0, cx + half, vy1),
        horizontal: Rect::new(hx0, cy - half, hx1, cy + half),
        joint: Rect::new(cx - half, cy - half, cx + half, cy + half),
    }
}

/// Brackets for all four corners in draw order.
pub fn brackets(rect: &Rect, length: f32, thickness: f32) -> [Bracket; 4] {
    Corner::ALL.map(|corner| bracket(rect, corner, length, thickness))
}
