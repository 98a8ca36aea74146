// SPDX-License-Identifier: MPL-2.0
//! In-memory host channel.

use super::message::decode_settings_update;
use crate::application::port::{HostChannel, SettingsHandler};
use crate::error::Result;
use crate::settings::SettingsPatch;
use std::fmt;

/// Fans settings updates out to every subscriber, in subscription order.
#[derive(Default)]
pub struct MessageBus {
    handlers: Vec<SettingsHandler>,
}

impl MessageBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a decoded update.
    pub fn publish(&mut self, patch: &SettingsPatch) {
        for handler in &mut self.handlers {
            handler(patch);
        }
    }

    /// Decodes a raw host message and delivers it if it is a settings update.
    ///
    /// Returns whether anything was delivered.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be decoded. Subscribers are
    /// not called in that case.
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool> {
        match decode_settings_update(json)? {
            Some(patch) => {
                self.publish(&patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl HostChannel for MessageBus {
    fn subscribe(&mut self, handler: SettingsHandler) {
        self.handlers.push(handler);
    }
}

impl fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBus")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn publishes_to_all_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = MessageBus::new();
        for id in 0..2 {
            let seen = Rc::clone(&seen);
            bus.subscribe(Box::new(move |patch: &SettingsPatch| {
                seen.borrow_mut().push((id, patch.border_radius));
            }));
        }

        bus.publish(&SettingsPatch {
            border_radius: Some(3.0),
            ..SettingsPatch::default()
        });

        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(*seen.borrow(), vec![(0, Some(3.0)), (1, Some(3.0))]);
    }

    #[test]
    fn dispatch_json_reports_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = MessageBus::new();
        let counter = Rc::clone(&count);
        bus.subscribe(Box::new(move |_: &SettingsPatch| *counter.borrow_mut() += 1));

        assert!(bus
            .dispatch_json(r#"{"type":"SETTINGS_UPDATE","settings":{}}"#)
            .expect("valid"));
        assert!(!bus.dispatch_json(r#"{"type":"OTHER"}"#).expect("valid"));
        assert!(bus.dispatch_json("garbage").is_err());
        assert_eq!(*count.borrow(), 1);
    }
}
