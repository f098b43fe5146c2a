// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`]
//! 2. **Environment variable** - `VIEWFINDER_CONFIG_DIR`
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CameraViewfinder";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "VIEWFINDER_CONFIG_DIR";

/// Returns the config directory, honoring an explicit override first.
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = PathBuf::from("/tmp/viewfinder-test");
        assert_eq!(config_dir_with_override(Some(dir.clone())), Some(dir));
    }
}
