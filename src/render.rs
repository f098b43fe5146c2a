// SPDX-License-Identifier: MPL-2.0
//! Headless rendering of the viewfinder, used by the command line.

use crate::error::Result;
use crate::viewfinder::raster::PixmapSurface;
use crate::viewfinder::recorder::{DrawOp, RecordingSurface};
use crate::viewfinder::{ViewfinderConfig, ViewfinderOverlay};
use image_rs::RgbaImage;
use std::path::Path;

/// Lays out and rasterizes the overlay on a transparent surface.
pub fn rasterize(config: ViewfinderConfig, width: u32, height: u32) -> Result<PixmapSurface> {
    let mut overlay = ViewfinderOverlay::new(config);
    overlay.measure(width, height)?;

    let mut surface = PixmapSurface::new(width, height)?;
    overlay.render(&mut surface);
    Ok(surface)
}

/// Renders the overlay to an image, optionally over a still frame standing
/// in for the camera preview.
pub fn render_image(
    config: ViewfinderConfig,
    width: u32,
    height: u32,
    background: Option<&Path>,
) -> Result<RgbaImage> {
    let surface = rasterize(config, width, height)?;
    match background {
        Some(path) => {
            let frame = image_rs::open(path)?.to_rgba8();
            log::info!(
                "compositing over {} ({}x{})",
                path.display(),
                frame.width(),
                frame.height()
            );
            Ok(surface.composite_over(&frame))
        }
        None => Ok(surface.to_rgba_image()),
    }
}

/// Renders to `output`; the format follows the file extension.
pub fn render_to_file(
    config: ViewfinderConfig,
    width: u32,
    height: u32,
    background: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let image = render_image(config, width, height, background)?;
    image.save(output)?;
    log::info!("wrote {}x{} viewfinder to {}", width, height, output.display());
    Ok(())
}

/// Records the draw calls of one render instead of rasterizing.
pub fn draw_ops(config: ViewfinderConfig, width: u32, height: u32) -> Result<Vec<DrawOp>> {
    let mut overlay = ViewfinderOverlay::new(config);
    overlay.measure(width, height)?;

    let mut surface = RecordingSurface::new();
    overlay.render(&mut surface);
    Ok(surface.into_ops())
}
