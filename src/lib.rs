// SPDX-License-Identifier: MPL-2.0
//! `camera_viewfinder` draws a viewfinder over a camera preview: a centered
//! crop window, a shaded surround and L-shaped corner brackets.
//!
//! The component itself lives in [`viewfinder`] and only needs a
//! [`viewfinder::DrawSurface`]. Backends are provided for `tiny-skia`
//! ([`viewfinder::raster`]) and for Iced canvases ([`ui::overlay`]).
//! Styling is loaded from TOML by [`config`].

pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod ui;
pub mod viewfinder;

#[cfg(test)]
mod test_utils;
