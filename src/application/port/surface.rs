// SPDX-License-Identifier: MPL-2.0
//! Rendering surface port definition.
//!
//! This module defines the [`RenderingSurface`] trait: the `<img>`-like
//! element the controller drives. A browser adapter maps these calls onto
//! DOM attributes; tests and the headless driver record them instead.
//!
//! The surface reports back through
//! [`ImageLoadController::on_load_succeeded`](crate::controller::ImageLoadController::on_load_succeeded)
//! and [`on_load_failed`](crate::controller::ImageLoadController::on_load_failed),
//! passing the source string the event belongs to.

use crate::presentation::Presentation;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CrossOrigin
// =============================================================================

/// Cross-origin request mode attached to an image request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossOrigin {
    /// No `crossorigin` attribute: a plain, non-CORS request.
    #[default]
    None,
    /// `crossorigin="anonymous"`: a CORS request without credentials.
    Anonymous,
}

impl CrossOrigin {
    /// Returns the attribute value to set, or `None` to remove the attribute.
    #[must_use]
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            CrossOrigin::None => None,
            CrossOrigin::Anonymous => Some("anonymous"),
        }
    }
}

// =============================================================================
// Visibility
// =============================================================================

/// What the widget chrome shows around the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    /// Loading spinner shown.
    pub spinner: bool,
    /// Error affordance with its message, if shown.
    pub error: Option<String>,
    /// Image revealed (opacity 1 and the `loaded` marker class).
    pub image_revealed: bool,
}

impl Visibility {
    /// Show spinner, hide error, hide image.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            spinner: true,
            error: None,
            image_revealed: false,
        }
    }

    /// Hide spinner, hide error, reveal image.
    #[must_use]
    pub fn revealed() -> Self {
        Self {
            spinner: false,
            error: None,
            image_revealed: true,
        }
    }

    /// Hide spinner, show error, hide image.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            spinner: false,
            error: Some(message.into()),
            image_revealed: false,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |shown: bool| if shown { "shown" } else { "hidden" };
        write!(
            f,
            "spinner {}, image {}, error {}",
            on_off(self.spinner),
            on_off(self.image_revealed),
            self.error.as_deref().unwrap_or("hidden")
        )
    }
}

// =============================================================================
// RenderingSurface Trait
// =============================================================================

/// Port for the element that displays the image.
///
/// Implementations must fire at most one success or failure callback per
/// assigned source. Late callbacks for an older source are tolerated: the
/// controller compares the reported source and drops mismatches.
pub trait RenderingSurface {
    /// Assigns a new source, superseding any outstanding request.
    fn set_source(&mut self, source: &str, cross_origin: CrossOrigin);

    /// Applies spinner/error/image visibility.
    fn set_visibility(&mut self, visibility: &Visibility);

    /// Applies style attributes and the hover rule.
    fn apply_presentation(&mut self, presentation: &Presentation);
}

impl<S: RenderingSurface + ?Sized> RenderingSurface for Box<S> {
    fn set_source(&mut self, source: &str, cross_origin: CrossOrigin) {
        (**self).set_source(source, cross_origin);
    }

    fn set_visibility(&mut self, visibility: &Visibility) {
        (**self).set_visibility(visibility);
    }

    fn apply_presentation(&mut self, presentation: &Presentation) {
        (**self).apply_presentation(presentation);
    }
}
