// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and styles for the preview window.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_100},
};
use iced::widget::container;
use iced::{Color, Theme};

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Color of the crop window readout.
pub fn status_text_color() -> Color {
    GRAY_100
}

/// Translucent strip behind the status readout and margin slider.
pub fn status_bar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(GRAY_100),
        ..Default::default()
    }
}
