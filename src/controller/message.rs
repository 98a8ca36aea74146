// SPDX-License-Identifier: MPL-2.0
//! External events consumed by the controller.

use crate::settings::SettingsPatch;

/// Events fed to [`ImageLoadController::handle`](super::ImageLoadController::handle).
/// The variants mirror the three external signals plus an explicit restart.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A settings update from the host channel.
    SettingsUpdate(SettingsPatch),
    /// The surface finished loading `source`.
    LoadSucceeded { source: String },
    /// The surface failed to load `source`.
    LoadFailed { source: String },
    /// Restart the pipeline for the current URL.
    Reload,
}
