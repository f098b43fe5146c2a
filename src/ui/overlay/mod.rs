// SPDX-License-Identifier: MPL-2.0
//! Canvas overlays drawn on top of the camera preview.

pub mod viewfinder;

pub use viewfinder::{viewfinder, ViewfinderCanvas};
