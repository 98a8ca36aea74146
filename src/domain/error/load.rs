// SPDX-License-Identifier: MPL-2.0
//! Image load errors.

use std::fmt;

/// Reasons an image request did not produce a visible image.
///
/// None of these ever reach the host page. They are surfaced through the
/// widget's own error affordance via [`LoadError::user_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadError {
    /// No URL is configured. Terminal, no network activity happens.
    EmptyUrl,

    /// The direct request failed. Transient: the proxy attempt follows.
    DirectLoadFailed,

    /// Both the direct and the proxied request failed. Terminal until the
    /// URL changes.
    ProxyLoadFailed,
}

impl LoadError {
    /// Returns whether no further attempt will be made for the current URL.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, LoadError::DirectLoadFailed)
    }

    /// Returns the short message shown in the widget's error affordance.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            LoadError::EmptyUrl => "No image URL provided",
            LoadError::DirectLoadFailed => "Image load failed, retrying through proxy",
            LoadError::ProxyLoadFailed => "Failed to load image (CORS or network error)",
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::EmptyUrl => write!(f, "No image URL configured"),
            LoadError::DirectLoadFailed => write!(f, "Direct image load failed"),
            LoadError::ProxyLoadFailed => write!(f, "Direct and proxied image loads failed"),
        }
    }
}

impl std::error::Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_direct_failure_is_transient() {
        assert!(LoadError::EmptyUrl.is_terminal());
        assert!(!LoadError::DirectLoadFailed.is_terminal());
        assert!(LoadError::ProxyLoadFailed.is_terminal());
    }

    #[test]
    fn user_messages() {
        assert_eq!(LoadError::EmptyUrl.user_message(), "No image URL provided");
        assert!(LoadError::ProxyLoadFailed.user_message().contains("CORS"));
    }

    #[test]
    fn display_is_diagnostic() {
        assert!(format!("{}", LoadError::ProxyLoadFailed).contains("proxied"));
    }
}
