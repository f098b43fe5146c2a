// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros, which handle
//! floating-point precision where `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 geometry comparisons.
pub const F32_EPSILON: f32 = 1e-4;
