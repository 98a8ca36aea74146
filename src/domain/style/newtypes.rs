// SPDX-License-Identifier: MPL-2.0
//! Style newtypes.
//!
//! This module provides type-safe wrappers for the numeric style settings,
//! ensuring they are always within valid ranges. Host payloads are not
//! trusted, so every constructor clamps instead of failing.

// =============================================================================
// Corner Radius
// =============================================================================

/// Corner radius bounds in pixels.
pub mod radius_bounds {
    /// Minimum corner radius.
    pub const MIN: u32 = 0;
    /// Maximum corner radius.
    pub const MAX: u32 = 500;
    /// Default corner radius.
    pub const DEFAULT: u32 = 0;
}

/// Corner radius in pixels, guaranteed to be within 0–500 px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerRadius(u32);

impl CornerRadius {
    /// Creates a new corner radius, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(radius_bounds::MIN, radius_bounds::MAX))
    }

    /// Creates a corner radius from an untrusted float (negative and NaN become 0).
    #[must_use]
    pub fn from_f64(px: f64) -> Self {
        Self::new(px_from_f64(px))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self(radius_bounds::DEFAULT)
    }
}

// =============================================================================
// Border Width
// =============================================================================

/// Border width bounds in pixels.
pub mod border_bounds {
    /// Minimum border width.
    pub const MIN: u32 = 0;
    /// Maximum border width.
    pub const MAX: u32 = 50;
    /// Default border width.
    pub const DEFAULT: u32 = 0;
}

/// Border width in pixels, guaranteed to be within 0–50 px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderWidth(u32);

impl BorderWidth {
    /// Creates a new border width, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(border_bounds::MIN, border_bounds::MAX))
    }

    /// Creates a border width from an untrusted float.
    #[must_use]
    pub fn from_f64(px: f64) -> Self {
        Self::new(px_from_f64(px))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether no border should be drawn.
    #[must_use]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Default for BorderWidth {
    fn default() -> Self {
        Self(border_bounds::DEFAULT)
    }
}

// =============================================================================
// Shadow Blur
// =============================================================================

/// Shadow blur bounds in pixels.
pub mod blur_bounds {
    /// Minimum blur radius.
    pub const MIN: u32 = 0;
    /// Maximum blur radius.
    pub const MAX: u32 = 100;
    /// Default blur radius.
    pub const DEFAULT: u32 = 0;
}

/// Shadow blur radius in pixels, guaranteed to be within 0–100 px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadowBlur(u32);

impl ShadowBlur {
    /// Creates a new blur radius, clamping the value to the valid range.
    #[must_use]
    pub fn new(px: u32) -> Self {
        Self(px.clamp(blur_bounds::MIN, blur_bounds::MAX))
    }

    /// Creates a blur radius from an untrusted float.
    #[must_use]
    pub fn from_f64(px: f64) -> Self {
        Self::new(px_from_f64(px))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether the shadow is disabled.
    #[must_use]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl Default for ShadowBlur {
    fn default() -> Self {
        Self(blur_bounds::DEFAULT)
    }
}

// =============================================================================
// Opacity Percent
// =============================================================================

/// Opacity percentage bounds.
pub mod opacity_bounds {
    /// Fully transparent.
    pub const MIN: u8 = 0;
    /// Fully opaque.
    pub const MAX: u8 = 100;
    /// Default shadow opacity.
    pub const DEFAULT: u8 = 30;
}

/// Opacity percentage, guaranteed to be within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpacityPercent(u8);

impl OpacityPercent {
    /// Creates a new opacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.clamp(opacity_bounds::MIN, opacity_bounds::MAX))
    }

    /// Creates an opacity from an untrusted float.
    #[must_use]
    pub fn from_f64(percent: f64) -> Self {
        let clamped = px_from_f64(percent).min(u32::from(opacity_bounds::MAX));
        // Clamped to 100 above, the cast cannot truncate.
        Self::new(clamped as u8)
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the opacity as an alpha channel value (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_alpha(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Returns this opacity raised by `points` percentage points, saturating at 100%.
    #[must_use]
    pub fn boosted(self, points: u8) -> Self {
        Self::new(self.0.saturating_add(points))
    }
}

impl Default for OpacityPercent {
    fn default() -> Self {
        Self(opacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Hover Scale
// =============================================================================

/// Hover scale bounds.
pub mod hover_scale_bounds {
    /// No enlargement.
    pub const MIN: f32 = 1.0;
    /// Double size.
    pub const MAX: f32 = 2.0;
    /// Default hover scale.
    pub const DEFAULT: f32 = 1.05;
}

/// Scale factor applied on hover, guaranteed to be within 1.0–2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverScale(f32);

impl HoverScale {
    /// Creates a new hover scale, clamping the value to the valid range.
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self(scale.clamp(hover_scale_bounds::MIN, hover_scale_bounds::MAX))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for HoverScale {
    fn default() -> Self {
        Self(hover_scale_bounds::DEFAULT)
    }
}

/// Rounds an untrusted pixel value to a non-negative integer.
fn px_from_f64(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    value.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn corner_radius_clamps_to_valid_range() {
        assert_eq!(CornerRadius::new(10_000).value(), radius_bounds::MAX);
        assert_eq!(CornerRadius::new(12).value(), 12);
        assert_eq!(CornerRadius::from_f64(-4.0).value(), 0);
        assert_eq!(CornerRadius::from_f64(7.6).value(), 8);
        assert_eq!(CornerRadius::from_f64(f64::NAN).value(), 0);
    }

    #[test]
    fn border_width_reports_none_at_zero() {
        assert!(BorderWidth::default().is_none());
        assert!(!BorderWidth::new(2).is_none());
        assert_eq!(BorderWidth::new(99).value(), border_bounds::MAX);
    }

    #[test]
    fn shadow_blur_clamps_to_valid_range() {
        assert_eq!(ShadowBlur::new(500).value(), blur_bounds::MAX);
        assert!(ShadowBlur::default().is_none());
    }

    #[test]
    fn opacity_converts_to_alpha() {
        assert_abs_diff_eq!(OpacityPercent::new(50).as_alpha(), 0.5);
        assert_abs_diff_eq!(OpacityPercent::new(30).as_alpha(), 0.3);
        assert_abs_diff_eq!(OpacityPercent::new(200).as_alpha(), 1.0);
    }

    #[test]
    fn opacity_boost_saturates_at_full() {
        assert_eq!(OpacityPercent::new(30).boosted(20).value(), 50);
        assert_eq!(OpacityPercent::new(95).boosted(20).value(), 100);
        assert_eq!(OpacityPercent::new(100).boosted(255).value(), 100);
    }

    #[test]
    fn opacity_from_float_is_clamped() {
        assert_eq!(OpacityPercent::from_f64(250.0).value(), 100);
        assert_eq!(OpacityPercent::from_f64(-1.0).value(), 0);
        assert_eq!(OpacityPercent::from_f64(42.4).value(), 42);
    }

    #[test]
    fn hover_scale_clamps_and_rejects_nan() {
        assert_abs_diff_eq!(HoverScale::new(0.5).value(), hover_scale_bounds::MIN);
        assert_abs_diff_eq!(HoverScale::new(3.0).value(), hover_scale_bounds::MAX);
        assert_abs_diff_eq!(HoverScale::new(f32::NAN).value(), hover_scale_bounds::DEFAULT);
        assert_abs_diff_eq!(HoverScale::new(1.2).value(), 1.2);
    }
}
