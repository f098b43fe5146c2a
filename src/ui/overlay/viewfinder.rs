// SPDX-License-Identifier: MPL-2.0
//! Viewfinder overlay rendered through an Iced canvas.

use crate::viewfinder::{DrawSurface, Rect, Rgba, ViewfinderConfig, ViewfinderOverlay};
use iced::widget::canvas::{self, Canvas, Frame, Path};
use iced::{border, mouse, Element, Length, Point, Rectangle, Size, Theme};

/// Canvas program that lays the viewfinder out over its own bounds and
/// draws it.
///
/// The canvas is expected to fill its parent, so the bounds it receives are
/// the parent's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewfinderCanvas {
    pub config: ViewfinderConfig,
}

impl ViewfinderCanvas {
    pub fn new(config: ViewfinderConfig) -> Self {
        Self { config }
    }
}

/// Full-size canvas element showing the viewfinder.
pub fn viewfinder<'a, Message: 'a>(config: ViewfinderConfig) -> Element<'a, Message> {
    Canvas::new(ViewfinderCanvas::new(config))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Adapts an Iced frame to the viewfinder draw primitives.
struct FrameSurface<'a> {
    frame: &'a mut Frame,
}

impl DrawSurface for FrameSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        self.frame.fill_rectangle(
            Point::new(rect.left, rect.top),
            Size::new(rect.width(), rect.height()),
            iced::Color::from(color),
        );
    }

    fn fill_round_rect(&mut self, rect: Rect, rx: f32, ry: f32, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        // Iced corners are circular.
        let path = Path::rounded_rectangle(
            Point::new(rect.left, rect.top),
            Size::new(rect.width(), rect.height()),
            border::Radius::from(rx.min(ry)),
        );
        self.frame.fill(&path, iced::Color::from(color));
    }
}

impl<Message> canvas::Program<Message> for ViewfinderCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let mut overlay = ViewfinderOverlay::new(self.config);
        match overlay.measure(bounds.width.round() as u32, bounds.height.round() as u32) {
            Ok(_) => overlay.render(&mut FrameSurface { frame: &mut frame }),
            Err(err) => log::debug!("viewfinder not drawn: {}", err),
        }

        vec![frame.into_geometry()]
    }
}
