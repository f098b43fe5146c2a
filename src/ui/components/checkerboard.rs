// SPDX-License-Identifier: MPL-2.0
//! Checkerboard shown in place of the camera preview when no background
//! frame is loaded, so that translucent shading stays visible.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

const DEFAULT_TILE_SIZE: f32 = 24.0;
const LIGHT_TILE: Color = palette::GRAY_700;
const DARK_TILE: Color = palette::GRAY_900;

#[derive(Debug, Clone, Copy)]
pub struct Checkerboard {
    tile_size: f32,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl Checkerboard {
    /// Tile color at grid position `(col, row)`.
    fn tile_color(col: u32, row: u32) -> Color {
        if (col + row) % 2 == 0 {
            LIGHT_TILE
        } else {
            DARK_TILE
        }
    }
}

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), DARK_TILE);

        let cols = (bounds.width / self.tile_size).ceil().max(1.0) as u32;
        let rows = (bounds.height / self.tile_size).ceil().max(1.0) as u32;
        let tile = Size::new(self.tile_size, self.tile_size);

        for (col, row) in (0..rows).flat_map(|row| (0..cols).map(move |col| (col, row))) {
            let color = Self::tile_color(col, row);
            if color == DARK_TILE {
                continue;
            }
            let origin = Point::new(col as f32 * self.tile_size, row as f32 * self.tile_size);
            frame.fill_rectangle(origin, tile, color);
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size checkerboard element.
pub fn background<'a, Message: 'a>() -> Element<'a, Message> {
    canvas::Canvas::new(Checkerboard::default())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

const _: () = {
    assert!(DEFAULT_TILE_SIZE > 0.0);
};
