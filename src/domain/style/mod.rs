// SPDX-License-Identifier: MPL-2.0
//! Style domain types.
//!
//! This module contains the presentation value objects of the widget,
//! independent of any rendering surface.

pub mod color;
pub mod fit;
pub mod newtypes;

// Re-export commonly used types
pub use color::{hex_to_rgba, HexColor, InvalidHexColor, Rgba};
pub use fit::{FitMode, UnknownFitMode};
pub use newtypes::{BorderWidth, CornerRadius, HoverScale, OpacityPercent, ShadowBlur};
