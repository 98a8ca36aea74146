// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions
//!    (CLI `--config-dir`, tests)
//! 2. **Environment variable** `IMAGE_DISPLAY_CONFIG_DIR` (if non-empty)
//! 3. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ImageDisplay";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "IMAGE_DISPLAY_CONFIG_DIR";

/// Returns the config directory, honoring `override_path` first.
#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config directory without an explicit override.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/tmp/image-display-test");
        assert_eq!(config_dir_with_override(Some(custom.clone())), Some(custom));
    }
}
