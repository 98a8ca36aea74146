// SPDX-License-Identifier: MPL-2.0
//! Host-side adapters.
//!
//! - [`message`]: Decoding of the JSON messages a host page posts
//! - [`bus`]: In-memory [`HostChannel`](crate::application::port::HostChannel)
//! - [`recording`]: A [`RenderingSurface`](crate::application::port::RenderingSurface)
//!   that records every call
//! - [`console`]: A surface printing directives as text lines
//! - [`script`]: Line-oriented event scripts for the headless driver

pub mod bus;
pub mod console;
pub mod message;
pub mod recording;
pub mod script;

pub use bus::MessageBus;
pub use console::ConsoleSurface;
pub use message::{decode_settings_update, SETTINGS_UPDATE};
pub use recording::{RecordingSurface, SurfaceCall};
pub use script::ScriptEvent;
