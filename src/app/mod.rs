// SPDX-License-Identifier: MPL-2.0
//! Preview window: a stand-in camera preview with the viewfinder on top.
//!
//! The app plays the role of a crop controller: it keeps its own
//! [`ViewfinderOverlay`] laid out against the window size and reads the
//! current crop window back through [`ViewfinderOverlay::rect`].

mod message;
mod view;

pub use message::{Flags, Message};
pub use view::format_rect;

use crate::config::StyleConfig;
use crate::error::ConfigurationError;
use crate::viewfinder::{ViewfinderConfig, ViewfinderOverlay};
use iced::widget::image;
use iced::{window, Element, Size, Subscription, Task};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

pub struct App {
    style: StyleConfig,
    overlay: ViewfinderOverlay,
    window_size: Size,
    layout_error: Option<ConfigurationError>,
    background: Option<image::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window_size", &self.window_size)
            .field("rect", &self.overlay.rect())
            .field("layout_error", &self.layout_error)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = flags.style.resolve().unwrap_or_else(|err| {
            log::error!("{err}; falling back to the default style");
            ViewfinderConfig::default()
        });
        let mut app = App {
            style: flags.style,
            overlay: ViewfinderOverlay::new(config),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            layout_error: None,
            background: flags.background.map(image::Handle::from_path),
        };
        app.relayout();

        // The initial size is a request; the platform may open the window
        // at a different one without emitting a resize event.
        let initial_size = window::latest()
            .and_then(window::size)
            .map(Message::WindowResized);
        (app, initial_size)
    }

    fn title(&self) -> String {
        String::from("Camera Viewfinder")
    }

    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MarginBottomChanged(margin_dp) => {
                let mut style = self.style;
                style.viewfinder.margin_bottom = margin_dp;
                match style.resolve() {
                    Ok(config) => {
                        self.style = style;
                        self.overlay = ViewfinderOverlay::new(config);
                        self.relayout();
                    }
                    Err(err) => log::error!("{err}"),
                }
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.relayout();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            config: *self.overlay.config(),
            margin_bottom_dp: self.style.viewfinder.margin_bottom,
            rect: self.overlay.rect(),
            layout_error: self.layout_error.as_ref(),
            background: self.background.as_ref(),
        })
    }

    /// Measures the overlay against the current window size.
    fn relayout(&mut self) {
        let width = self.window_size.width.round() as u32;
        let height = self.window_size.height.round() as u32;
        match self.overlay.measure(width, height) {
            Ok(_) => self.layout_error = None,
            Err(err) => {
                log::error!("{} ({})", err, err.key());
                self.layout_error = Some(err);
            }
        }
    }
}
