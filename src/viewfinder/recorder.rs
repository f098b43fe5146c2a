// SPDX-License-Identifier: MPL-2.0
//! Surface that records draw calls instead of producing pixels.

use super::color::Rgba;
use super::geometry::Rect;
use super::surface::DrawSurface;
use std::fmt;

/// One recorded primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Rect { rect: Rect, color: Rgba },
    RoundRect { rect: Rect, rx: f32, ry: f32, color: Rgba },
}

impl DrawOp {
    pub fn rect(&self) -> Rect {
        match self {
            DrawOp::Rect { rect, .. } | DrawOp::RoundRect { rect, .. } => *rect,
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            DrawOp::Rect { color, .. } | DrawOp::RoundRect { color, .. } => *color,
        }
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rect();
        match self {
            DrawOp::Rect { color, .. } => write!(
                f,
                "rect       [{:.1}, {:.1}, {:.1}, {:.1}] {}",
                r.left,
                r.top,
                r.right,
                r.bottom,
                color.to_hex()
            ),
            DrawOp::RoundRect { rx, ry, color, .. } => write!(
                f,
                "round-rect [{:.1}, {:.1}, {:.1}, {:.1}] r={:.1}x{:.1} {}",
                r.left,
                r.top,
                r.right,
                r.bottom,
                rx,
                ry,
                color.to_hex()
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn fill_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, color: Rgba) {
        self.ops.push(DrawOp::RoundRect {
            rect,
            rx,
            ry,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Rgba::BLACK);
        surface.fill_round_rect(Rect::new(1.0, 1.0, 5.0, 5.0), 2.0, 1.0, Rgba::WHITE);

        let ops = surface.into_ops();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].color(), Rgba::BLACK);
        assert_eq!(ops[1].rect(), Rect::new(1.0, 1.0, 5.0, 5.0));
    }

    #[test]
    fn display_is_one_line_per_op() {
        let op = DrawOp::RoundRect {
            rect: Rect::new(8.0, 8.0, 12.0, 30.0),
            rx: 2.0,
            ry: 2.0,
            color: Rgba::WHITE,
        };
        assert_eq!(
            op.to_string(),
            "round-rect [8.0, 8.0, 12.0, 30.0] r=2.0x2.0 #FFFFFFFF"
        );
    }
}
