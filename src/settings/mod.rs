// SPDX-License-Identifier: MPL-2.0
//! Widget settings and the partial updates the host sends.
//!
//! [`Settings`] is the complete, validated value the controller owns. It is
//! replaced as a whole on every update: [`Settings::merged`] overlays a
//! [`SettingsPatch`] and returns a new value.
//!
//! # Examples
//!
//! ```
//! use image_display::settings::{Settings, SettingsPatch};
//!
//! let patch: SettingsPatch =
//!     serde_json::from_str(r#"{"borderRadius": 12, "unknownField": true}"#).unwrap();
//! let settings = Settings::default().merged(&patch);
//!
//! assert_eq!(settings.corner_radius.value(), 12);
//! assert_eq!(settings.image_url, Settings::default().image_url);
//! ```

mod lenient;

use crate::domain::style::{
    BorderWidth, CornerRadius, FitMode, HexColor, HoverScale, OpacityPercent, ShadowBlur,
};
use serde::{Deserialize, Serialize};

/// Image shown until the host configures one.
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/400/300";

/// Alt text used until the host configures one.
pub const DEFAULT_ALT_TEXT: &str = "Image";

// =============================================================================
// Settings
// =============================================================================

/// Complete widget settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub image_url: String,
    pub alt_text: String,
    pub corner_radius: CornerRadius,
    pub border_width: BorderWidth,
    pub border_color: HexColor,
    pub shadow_blur: ShadowBlur,
    pub shadow_color: HexColor,
    pub shadow_opacity: OpacityPercent,
    pub fit: FitMode,
    pub hover_enabled: bool,
    pub hover_scale: HoverScale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            image_url: DEFAULT_IMAGE_URL.to_string(),
            alt_text: DEFAULT_ALT_TEXT.to_string(),
            corner_radius: CornerRadius::default(),
            border_width: BorderWidth::default(),
            border_color: HexColor::WHITE,
            shadow_blur: ShadowBlur::default(),
            shadow_color: HexColor::BLACK,
            shadow_opacity: OpacityPercent::default(),
            fit: FitMode::default(),
            hover_enabled: false,
            hover_scale: HoverScale::default(),
        }
    }
}

impl Settings {
    /// Returns a copy of these settings with every field present in `patch`
    /// overwritten. Fields absent from the patch keep their value.
    ///
    /// Out-of-range numbers are clamped. Unparseable colors and unknown fit
    /// keywords are ignored (the previous value stays) and logged.
    #[must_use]
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        let mut next = self.clone();

        if let Some(url) = &patch.image_url {
            next.image_url = url.trim().to_string();
        }
        if let Some(alt) = &patch.alt_text {
            next.alt_text = alt.clone();
        }
        if let Some(radius) = patch.border_radius {
            next.corner_radius = CornerRadius::from_f64(radius);
        }
        if let Some(width) = patch.border_width {
            next.border_width = BorderWidth::from_f64(width);
        }
        if let Some(color) = &patch.border_color {
            next.border_color = parse_color_or(color, self.border_color, "borderColor");
        }
        if let Some(blur) = patch.shadow_blur {
            next.shadow_blur = ShadowBlur::from_f64(blur);
        }
        if let Some(color) = &patch.shadow_color {
            next.shadow_color = parse_color_or(color, self.shadow_color, "shadowColor");
        }
        if let Some(opacity) = patch.shadow_opacity {
            next.shadow_opacity = OpacityPercent::from_f64(opacity);
        }
        if let Some(fit) = &patch.object_fit {
            match fit.parse::<FitMode>() {
                Ok(mode) => next.fit = mode,
                Err(err) => log::warn!("Ignoring objectFit update: {err}"),
            }
        }
        if let Some(enabled) = patch.hover_effect {
            next.hover_enabled = enabled;
        }
        if let Some(scale) = patch.hover_scale {
            next.hover_scale = HoverScale::new(scale as f32);
        }

        next
    }

    /// Returns whether a URL is configured.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.image_url.trim().is_empty()
    }
}

fn parse_color_or(input: &str, fallback: HexColor, field: &str) -> HexColor {
    match HexColor::parse(input) {
        Ok(color) => color,
        Err(err) => {
            log::warn!("Ignoring {field} update: {err}");
            fallback
        }
    }
}

// =============================================================================
// SettingsPatch
// =============================================================================

/// A partial settings update as sent by the host.
///
/// Every field is optional. Field names follow the host's camelCase
/// convention; snake_case aliases are accepted so the same type can be used
/// in TOML configuration. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, alias = "alt_text", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    #[serde(
        default,
        alias = "border_radius",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_radius: Option<f64>,

    #[serde(
        default,
        alias = "border_width",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_width: Option<f64>,

    #[serde(default, alias = "border_color", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    #[serde(
        default,
        alias = "shadow_blur",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub shadow_blur: Option<f64>,

    #[serde(default, alias = "shadow_color", skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,

    #[serde(
        default,
        alias = "shadow_opacity",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub shadow_opacity: Option<f64>,

    #[serde(default, alias = "object_fit", skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<String>,

    #[serde(
        default,
        alias = "hover_effect",
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_effect: Option<bool>,

    #[serde(
        default,
        alias = "hover_scale",
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_scale: Option<f64>,
}

impl SettingsPatch {
    /// A patch that only changes the image URL.
    #[must_use]
    pub fn with_image_url(url: impl Into<String>) -> Self {
        Self {
            image_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Returns whether the patch carries no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
