// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host adapters implement.
//! The controller depends only on these traits, never on a concrete DOM or
//! message transport.
//!
//! # Available Ports
//!
//! - [`channel`]: Inbound settings updates from the host page
//! - [`surface`]: The element displaying the image
//!
//! # Design Notes
//!
//! - Everything runs on one thread; no trait requires `Send`
//! - Surface calls are fire-and-forget; results come back as controller calls

pub mod channel;
pub mod surface;

// Re-export main types for convenience
pub use channel::{HostChannel, SettingsHandler};
pub use surface::{CrossOrigin, RenderingSurface, Visibility};
