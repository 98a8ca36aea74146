// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and controller setup.
//!
//! Re-exports the `approx` crate's assertion macros, which handle
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::config::Config;
use crate::controller::ImageLoadController;
use crate::host::RecordingSurface;

/// A controller with default configuration and a recording surface.
pub fn recording_controller() -> ImageLoadController<RecordingSurface> {
    ImageLoadController::new(RecordingSurface::default(), &Config::default())
}

/// A controller whose initial URL is `url`.
pub fn recording_controller_for(url: &str) -> ImageLoadController<RecordingSurface> {
    let mut config = Config::default();
    config.defaults.image_url = Some(url.to_string());
    ImageLoadController::new(RecordingSurface::default(), &config)
}
