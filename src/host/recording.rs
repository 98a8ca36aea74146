// SPDX-License-Identifier: MPL-2.0
//! A rendering surface that records calls instead of rendering.
//!
//! Used by tests and by embedders that want to inspect directives before
//! forwarding them elsewhere.

use crate::application::port::{CrossOrigin, RenderingSurface, Visibility};
use crate::presentation::Presentation;

/// One call made on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    SetSource {
        source: String,
        cross_origin: CrossOrigin,
    },
    Visibility(Visibility),
    Presentation(Presentation),
}

/// Records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// All calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Sources assigned so far, i.e. the network requests issued.
    #[must_use]
    pub fn sources(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::SetSource { source, .. } => Some(source.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recently assigned source.
    #[must_use]
    pub fn current_source(&self) -> Option<&str> {
        self.sources().last().copied()
    }

    /// Cross-origin mode of the most recent request.
    #[must_use]
    pub fn last_cross_origin(&self) -> Option<CrossOrigin> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::SetSource { cross_origin, .. } => Some(*cross_origin),
            _ => None,
        })
    }

    #[must_use]
    pub fn last_visibility(&self) -> Option<&Visibility> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Visibility(visibility) => Some(visibility),
            _ => None,
        })
    }

    #[must_use]
    pub fn last_presentation(&self) -> Option<&Presentation> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Presentation(presentation) => Some(presentation),
            _ => None,
        })
    }

    /// Number of presentation applications.
    #[must_use]
    pub fn presentation_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Presentation(_)))
            .count()
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderingSurface for RecordingSurface {
    fn set_source(&mut self, source: &str, cross_origin: CrossOrigin) {
        self.calls.push(SurfaceCall::SetSource {
            source: source.to_string(),
            cross_origin,
        });
    }

    fn set_visibility(&mut self, visibility: &Visibility) {
        self.calls.push(SurfaceCall::Visibility(visibility.clone()));
    }

    fn apply_presentation(&mut self, presentation: &Presentation) {
        self.calls.push(SurfaceCall::Presentation(presentation.clone()));
    }
}
