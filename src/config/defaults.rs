// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Proxy**: CORS passthrough service
//! - **Load**: Cross-origin mode of each attempt
//! - **Widget**: Element identity and diagnostics sizing

use crate::application::port::CrossOrigin;

// ==========================================================================
// Proxy Defaults
// ==========================================================================

/// Default proxy prefix; the percent-encoded image URL is appended to it.
pub const DEFAULT_PROXY_BASE_URL: &str = crate::proxy::DEFAULT_PROXY_BASE;

// ==========================================================================
// Load Defaults
// ==========================================================================

/// Direct attempts are plain requests so servers without CORS headers
/// still display.
pub const DEFAULT_DIRECT_CROSS_ORIGIN: CrossOrigin = CrossOrigin::None;

/// The proxy answers with permissive CORS headers.
pub const DEFAULT_PROXY_CROSS_ORIGIN: CrossOrigin = CrossOrigin::Anonymous;

// ==========================================================================
// Widget Defaults
// ==========================================================================

/// Id of the image element; the hover rule is keyed by it.
pub const DEFAULT_ELEMENT_ID: &str = "displayImage";

/// Default number of retained diagnostic events.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize =
    crate::diagnostics::buffer_capacity_bounds::DEFAULT;
