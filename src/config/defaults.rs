// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the viewfinder style.
//!
//! Dimensions are in density-independent pixels (dp) and are converted to
//! physical pixels with the display density when a style is resolved.

use crate::viewfinder::Rgba;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Side of the square finder window.
pub const DEFAULT_FINDER_SIZE_DP: u32 = 285;

/// Upward shift of the finder window from the vertical center.
pub const DEFAULT_FINDER_BOTTOM_MARGIN_DP: i32 = 0;

/// Reach of each corner bracket bar.
pub const DEFAULT_CORNER_LENGTH_DP: u32 = 30;

/// Width of the corner bracket bars.
pub const DEFAULT_CORNER_THICKNESS_DP: u32 = 4;

// ==========================================================================
// Color Defaults
// ==========================================================================

pub const DEFAULT_CORNER_COLOR: Rgba = Rgba::WHITE;

pub const DEFAULT_SHADOW_COLOR: Rgba = Rgba::TRANSPARENT;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Physical pixels per dp.
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Smallest accepted display density.
pub const MIN_DENSITY: f32 = 0.1;

/// Largest accepted display density.
pub const MAX_DENSITY: f32 = 8.0;

// ==========================================================================
// Headless Render Defaults
// ==========================================================================

pub const DEFAULT_RENDER_WIDTH: u32 = 1080;

pub const DEFAULT_RENDER_HEIGHT: u32 = 1920;

// ==========================================================================
// Preview Window Defaults
// ==========================================================================

/// Range of the margin slider in the preview window, in dp either way.
pub const MAX_PREVIEW_MARGIN_DP: i32 = 400;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FINDER_SIZE_DP > 0);
    assert!(DEFAULT_CORNER_THICKNESS_DP > 0);
    assert!(DEFAULT_CORNER_LENGTH_DP > DEFAULT_CORNER_THICKNESS_DP);
    assert!(DEFAULT_CORNER_LENGTH_DP * 2 < DEFAULT_FINDER_SIZE_DP);

    assert!(MIN_DENSITY > 0.0);
    assert!(MAX_DENSITY > MIN_DENSITY);
    assert!(DEFAULT_DENSITY >= MIN_DENSITY);
    assert!(DEFAULT_DENSITY <= MAX_DENSITY);

    assert!(DEFAULT_RENDER_HEIGHT > DEFAULT_FINDER_SIZE_DP);
    assert!(DEFAULT_RENDER_WIDTH > DEFAULT_FINDER_SIZE_DP);

    assert!(MAX_PREVIEW_MARGIN_DP > 0);
};
