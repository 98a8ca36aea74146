// SPDX-License-Identifier: MPL-2.0
//! CORS proxy URL rewriting.
//!
//! The proxy is an opaque HTTP passthrough addressed by a fixed template:
//! `base + percent_encode(original_url)`. There is a single proxy, no pool
//! and no retry beyond the one fallback attempt.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Default passthrough service.
pub const DEFAULT_PROXY_BASE: &str = "https://corsproxy.io/?";

/// Characters left as-is, matching ECMAScript `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `input` as a single URL component.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Rewrites image URLs through the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRewriter {
    base: String,
}

impl ProxyRewriter {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the proxied form of `url`.
    #[must_use]
    pub fn rewrite(&self, url: &str) -> String {
        format!("{}{}", self.base, percent_encode(url))
    }
}

impl Default for ProxyRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_BASE)
    }
}
