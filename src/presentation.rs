// SPDX-License-Identifier: MPL-2.0
//! Projection of [`Settings`] onto style directives.
//!
//! [`Presentation`] is a pure function of the settings and the element id:
//! it never looks at the load state. The hover emphasis is expressed once
//! per update as a declarative rule keyed by the element id, not computed
//! per pointer event.

use crate::domain::style::{BorderWidth, CornerRadius, FitMode, HexColor, HoverScale, Rgba};
use crate::settings::Settings;
use std::fmt::Write as _;

/// Vertical offset of the resting shadow, in pixels.
pub const SHADOW_OFFSET_Y: u32 = 4;

/// Vertical offset of the hover shadow, in pixels.
pub const HOVER_SHADOW_OFFSET_Y: u32 = 8;

/// Opacity points added to the shadow color on hover.
pub const HOVER_OPACITY_BOOST: u8 = 20;

/// Smallest blur radius of the hover shadow, in pixels.
pub const HOVER_MIN_BLUR: u32 = 10;

/// Duration of the hover transition, in seconds.
const TRANSITION_SECS: f32 = 0.3;

/// A solid border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub width: BorderWidth,
    pub color: HexColor,
}

/// A drop shadow below the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_y: u32,
    pub blur: u32,
    pub color: Rgba,
}

impl Shadow {
    /// CSS `box-shadow` value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("0 {}px {}px {}", self.offset_y, self.blur, self.color)
    }
}

/// Hover emphasis rule.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverRule {
    /// Element the rule targets.
    pub element_id: String,
    pub scale: HoverScale,
    pub shadow: Shadow,
}

impl HoverRule {
    /// CSS rule text, e.g. `#displayImage:hover { transform: scale(1.05); ... }`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "#{}:hover {{ transform: scale({}); box-shadow: {}; }}",
            self.element_id,
            self.scale.value(),
            self.shadow.to_css()
        )
    }
}

/// The full set of style directives for the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub alt_text: String,
    pub corner_radius: CornerRadius,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    pub fit: FitMode,
    pub hover: Option<HoverRule>,
}

impl Presentation {
    /// Projects `settings` for the element identified by `element_id`.
    #[must_use]
    pub fn from_settings(settings: &Settings, element_id: &str) -> Self {
        let border = (!settings.border_width.is_none()).then_some(Border {
            width: settings.border_width,
            color: settings.border_color,
        });

        let shadow = (!settings.shadow_blur.is_none()).then(|| Shadow {
            offset_y: SHADOW_OFFSET_Y,
            blur: settings.shadow_blur.value(),
            color: settings.shadow_color.with_opacity(settings.shadow_opacity),
        });

        let hover = settings.hover_enabled.then(|| {
            let base_blur = settings.shadow_blur.value();
            HoverRule {
                element_id: element_id.to_string(),
                scale: settings.hover_scale,
                shadow: Shadow {
                    offset_y: HOVER_SHADOW_OFFSET_Y,
                    blur: (base_blur + base_blur / 2).max(HOVER_MIN_BLUR),
                    color: settings
                        .shadow_color
                        .with_opacity(settings.shadow_opacity.boosted(HOVER_OPACITY_BOOST)),
                },
            }
        });

        Self {
            alt_text: settings.alt_text.clone(),
            corner_radius: settings.corner_radius,
            border,
            shadow,
            fit: settings.fit,
            hover,
        }
    }

    /// Inline `style` attribute value for the image element.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        let _ = write!(style, "border-radius: {}px; ", self.corner_radius.value());
        match &self.border {
            Some(border) => {
                let _ = write!(
                    style,
                    "border: {}px solid {}; ",
                    border.width.value(),
                    border.color
                );
            }
            None => style.push_str("border: none; "),
        }
        match &self.shadow {
            Some(shadow) => {
                let _ = write!(style, "box-shadow: {}; ", shadow.to_css());
            }
            None => style.push_str("box-shadow: none; "),
        }
        let _ = write!(style, "object-fit: {}; ", self.fit);
        let _ = write!(
            style,
            "transition: transform {TRANSITION_SECS}s ease, box-shadow {TRANSITION_SECS}s ease;"
        );
        style
    }

    /// Stylesheet text for the hover rule, or `None` when hover is disabled.
    #[must_use]
    pub fn hover_css(&self) -> Option<String> {
        self.hover.as_ref().map(HoverRule::to_css)
    }
}
