// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the preview window.

use crate::config::StyleConfig;
use iced::Size;
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The margin slider moved (value in dp).
    MarginBottomChanged(i32),
    /// The window was resized; the overlay is laid out again.
    WindowResized(Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub style: StyleConfig,
    /// Still frame shown in place of the camera preview.
    pub background: Option<PathBuf>,
}
