// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for load pipeline tracing.

use crate::domain::load::LoadPhase;
use serde::{Deserialize, Serialize};

/// Serializable mirror of [`LoadPhase`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Attempt {
    Direct,
    Proxy,
}

impl From<LoadPhase> for Attempt {
    fn from(phase: LoadPhase) -> Self {
        match phase {
            LoadPhase::Direct => Attempt::Direct,
            LoadPhase::Proxy => Attempt::Proxy,
        }
    }
}

/// Outcome reported by the rendering surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A settings update was merged.
    SettingsApplied {
        url_changed: bool,
    },

    /// A source was assigned to the surface.
    LoadRequested {
        attempt: Attempt,
        source: String,
    },

    /// The surface reported an outcome for the outstanding request.
    LoadSettled {
        attempt: Attempt,
        outcome: Outcome,
    },

    /// The pipeline gave up for the current URL.
    LoadAbandoned {
        reason: String,
    },

    /// A callback for a superseded source was dropped.
    StaleCallbackIgnored {
        source: String,
        outcome: Outcome,
    },
}

/// A recorded event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// Monotonic position in the recording, starting at 0.
    pub sequence: u64,
    /// Milliseconds since the recorder was created.
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}
