// SPDX-License-Identifier: MPL-2.0
//! Host configuration channel port definition.
//!
//! The host page pushes settings updates to the widget. The transport
//! (cross-window messages, a test harness, stdin) is hidden behind
//! [`HostChannel`]; the controller only ever sees decoded
//! [`SettingsPatch`] values.

use crate::settings::SettingsPatch;

/// Callback invoked for every settings update received from the host.
pub type SettingsHandler = Box<dyn FnMut(&SettingsPatch)>;

/// Port for the inbound settings channel.
pub trait HostChannel {
    /// Registers a handler for settings updates.
    ///
    /// Handlers are invoked in registration order, on the thread that
    /// delivers the update.
    fn subscribe(&mut self, handler: SettingsHandler);
}
