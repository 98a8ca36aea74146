// SPDX-License-Identifier: MPL-2.0
//! Tag of the single outstanding image request.

use super::state::LoadPhase;

/// The request currently assigned to the rendering surface.
///
/// Surface callbacks carry the source they were fired for. Only a callback
/// whose source equals [`PendingRequest::source`] may drive a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    source: String,
    phase: LoadPhase,
}

impl PendingRequest {
    #[must_use]
    pub fn new(source: impl Into<String>, phase: LoadPhase) -> Self {
        Self {
            source: source.into(),
            phase,
        }
    }

    /// The exact source string assigned to the surface.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Returns whether a callback fired for `source` belongs to this request.
    #[must_use]
    pub fn matches(&self, source: &str) -> bool {
        self.source == source
    }
}
