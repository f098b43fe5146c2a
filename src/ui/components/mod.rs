// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`checkerboard`] - Checkerboard pattern standing in for the camera
//!   preview

pub mod checkerboard;
