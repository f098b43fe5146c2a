// SPDX-License-Identifier: MPL-2.0
//! Iced integration of the viewfinder and the preview window widgets.
//!
//! - [`overlay`] - Viewfinder canvas program
//! - [`components`] - Reusable components (checkerboard stand-in preview)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theme`] - Colors and container styles

pub mod components;
pub mod design_tokens;
pub mod overlay;
pub mod theme;
