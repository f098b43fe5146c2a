// SPDX-License-Identifier: MPL-2.0
//! View rendering for the preview window.
//!
//! Layers, bottom to top: the stand-in camera preview, the viewfinder canvas
//! and a status bar with the margin slider.

use super::Message;
use crate::config::MAX_PREVIEW_MARGIN_DP;
use crate::error::ConfigurationError;
use crate::ui::components::checkerboard;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay;
use crate::ui::theme;
use crate::viewfinder::{ViewfinderConfig, ViewfinderRect};
use iced::alignment::Vertical;
use iced::widget::{column, container, image, slider, text, Stack};
use iced::{ContentFit, Element, Length};

/// Context required to render the preview.
pub struct ViewContext<'a> {
    pub config: ViewfinderConfig,
    pub margin_bottom_dp: i32,
    pub rect: ViewfinderRect,
    pub layout_error: Option<&'a ConfigurationError>,
    pub background: Option<&'a image::Handle>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let preview: Element<'_, Message> = match ctx.background {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => checkerboard::background(),
    };

    Stack::new()
        .push(preview)
        .push(overlay::viewfinder(ctx.config))
        .push(
            container(status_bar(&ctx))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        )
        .into()
}

fn status_bar<'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let status = match ctx.layout_error {
        Some(err) => text(err.to_string())
            .size(typography::BODY)
            .color(theme::error_text_color()),
        None => text(format_rect(&ctx.rect))
            .size(typography::BODY)
            .color(theme::status_text_color()),
    };

    let margin =
        text(format!("Margin bottom: {} dp", ctx.margin_bottom_dp)).size(typography::CAPTION);

    container(
        column![
            status,
            margin,
            slider(
                -MAX_PREVIEW_MARGIN_DP..=MAX_PREVIEW_MARGIN_DP,
                ctx.margin_bottom_dp,
                Message::MarginBottomChanged,
            ),
        ]
        .spacing(spacing::XXS),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(theme::status_bar_style)
    .into()
}

/// Human-readable crop window, e.g. `Crop window 357.5, 357.5 → 642.5, 642.5 (285 × 285)`.
pub fn format_rect(rect: &ViewfinderRect) -> String {
    format!(
        "Crop window {:.1}, {:.1} → {:.1}, {:.1} ({:.0} × {:.0})",
        rect.left,
        rect.top,
        rect.right,
        rect.bottom,
        rect.width(),
        rect.height()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewfinder::Rect;

    #[test]
    fn format_rect_shows_corners_and_size() {
        let rect = Rect::new(357.5, 357.5, 642.5, 642.5);
        assert_eq!(
            format_rect(&rect),
            "Crop window 357.5, 357.5 → 642.5, 642.5 (285 × 285)"
        );
    }
}
