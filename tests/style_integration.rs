// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style, design tokens and the Iced canvas
//! glue.

#[cfg(test)]
mod tests {
    use camera_viewfinder::ui::design_tokens::{opacity, palette, spacing, typography};
    use camera_viewfinder::ui::overlay::{self, ViewfinderCanvas};
    use camera_viewfinder::ui::theme;
    use camera_viewfinder::viewfinder::{Rgba, ViewfinderConfig};
    use iced::Theme;

    #[test]
    fn status_bar_style_is_translucent() {
        let style = theme::status_bar_style(&Theme::Dark);
        match style.background {
            Some(iced::Background::Color(color)) => {
                assert_eq!(color.a, opacity::OVERLAY_STRONG);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::ERROR_500;
        let _ = spacing::SM;
        let _ = typography::BODY;
    }

    #[test]
    fn canvas_keeps_resolved_config() {
        let config = ViewfinderConfig {
            corner_color: Rgba::new(255, 0, 0, 255),
            ..ViewfinderConfig::default()
        };
        let canvas = ViewfinderCanvas::new(config);
        assert_eq!(canvas.config, config);

        let _element: iced::Element<'_, ()> = overlay::viewfinder(config);
    }

    #[test]
    fn error_text_differs_from_status_text() {
        assert_ne!(theme::error_text_color(), theme::status_text_color());
    }
}
