// SPDX-License-Identifier: MPL-2.0
//! Image load state machine.
//!
//! ```text
//! Idle            --load(url empty)--> Failed(EmptyUrl)
//! Idle            --load(url set)----> Loading(Direct)
//! Loading(Direct) --succeeded--------> LoadedDirect
//! Loading(Direct) --failed-----------> Loading(Proxy)
//! Loading(Proxy)  --succeeded--------> LoadedViaProxy
//! Loading(Proxy)  --failed-----------> Failed(ProxyLoadFailed)
//! any             --url changed------> Loading(Direct)
//! ```

use crate::domain::error::LoadError;

/// Which attempt an outstanding request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadPhase {
    /// The configured URL as-is.
    Direct,
    /// The configured URL rewritten through the CORS proxy.
    Proxy,
}

impl LoadPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LoadPhase::Direct => "direct",
            LoadPhase::Proxy => "proxy",
        }
    }
}

/// Current state of the image pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading(LoadPhase),
    /// The direct request succeeded.
    LoadedDirect,
    /// The direct request failed and the proxied one succeeded.
    LoadedViaProxy,
    /// No image will be shown until the URL changes.
    Failed(LoadError),
}

impl LoadState {
    /// Returns true while a request is outstanding.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Returns true if an image is displayed.
    #[must_use]
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::LoadedDirect | Self::LoadedViaProxy)
    }

    /// Returns true if the pipeline gave up.
    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns true for states that need no further network action until
    /// a new URL arrives.
    #[must_use]
    pub fn is_settled(self) -> bool {
        self.is_loaded() || self.is_failed()
    }

    /// Returns the phase of the outstanding request, if any.
    #[must_use]
    pub fn phase(self) -> Option<LoadPhase> {
        match self {
            Self::Loading(phase) => Some(phase),
            _ => None,
        }
    }

    /// Returns the failure reason, if failed.
    #[must_use]
    pub fn error(self) -> Option<LoadError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// The settled state reached when the request of `phase` succeeds.
    #[must_use]
    pub fn loaded_via(phase: LoadPhase) -> Self {
        match phase {
            LoadPhase::Direct => Self::LoadedDirect,
            LoadPhase::Proxy => Self::LoadedViaProxy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
        assert!(!LoadState::Idle.is_settled());
    }

    #[test]
    fn settled_states() {
        assert!(LoadState::LoadedDirect.is_settled());
        assert!(LoadState::LoadedViaProxy.is_settled());
        assert!(LoadState::Failed(LoadError::EmptyUrl).is_settled());
        assert!(!LoadState::Loading(LoadPhase::Direct).is_settled());
    }

    #[test]
    fn phase_and_error_accessors() {
        assert_eq!(LoadState::Loading(LoadPhase::Proxy).phase(), Some(LoadPhase::Proxy));
        assert_eq!(LoadState::LoadedDirect.phase(), None);
        assert_eq!(
            LoadState::Failed(LoadError::ProxyLoadFailed).error(),
            Some(LoadError::ProxyLoadFailed)
        );
        assert_eq!(LoadState::Idle.error(), None);
    }

    #[test]
    fn loaded_via_maps_phase() {
        assert_eq!(LoadState::loaded_via(LoadPhase::Direct), LoadState::LoadedDirect);
        assert_eq!(LoadState::loaded_via(LoadPhase::Proxy), LoadState::LoadedViaProxy);
    }
}
