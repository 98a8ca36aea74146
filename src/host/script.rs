// SPDX-License-Identifier: MPL-2.0
//! Event scripts for driving a controller without a browser.
//!
//! One JSON object per line; blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! {"type": "SETTINGS_UPDATE", "settings": {"imageUrl": "https://example.com/a.png"}}
//! {"type": "LOAD_ERROR"}
//! {"type": "LOAD_OK"}
//! {"type": "RELOAD"}
//! ```
//!
//! `LOAD_OK` and `LOAD_ERROR` apply to the active source unless a `source`
//! is given, which allows replaying late callbacks for older requests.

use crate::controller::Message;
use crate::error::Result;
use crate::settings::SettingsPatch;
use serde::Deserialize;

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScriptEvent {
    SettingsUpdate {
        #[serde(default)]
        settings: SettingsPatch,
    },
    LoadOk {
        #[serde(default)]
        source: Option<String>,
    },
    LoadError {
        #[serde(default)]
        source: Option<String>,
    },
    Reload,
}

impl ScriptEvent {
    /// Parses one script line. Returns `Ok(None)` for blank and comment lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a known event.
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(line)?))
    }

    /// Converts into a controller message, resolving a missing `source` to
    /// `active_source`. Returns `None` for a load event with no source to
    /// apply to.
    #[must_use]
    pub fn into_message(self, active_source: Option<&str>) -> Option<Message> {
        let resolve = |source: Option<String>| source.or_else(|| active_source.map(String::from));
        match self {
            ScriptEvent::SettingsUpdate { settings } => Some(Message::SettingsUpdate(settings)),
            ScriptEvent::LoadOk { source } => {
                resolve(source).map(|source| Message::LoadSucceeded { source })
            }
            ScriptEvent::LoadError { source } => {
                resolve(source).map(|source| Message::LoadFailed { source })
            }
            ScriptEvent::Reload => Some(Message::Reload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(ScriptEvent::parse_line("   ").expect("ok"), None);
        assert_eq!(ScriptEvent::parse_line("# note").expect("ok"), None);
    }

    #[test]
    fn parses_each_event_kind() {
        assert_eq!(
            ScriptEvent::parse_line(r#"{"type":"RELOAD"}"#).expect("ok"),
            Some(ScriptEvent::Reload)
        );
        assert_eq!(
            ScriptEvent::parse_line(r#"{"type":"LOAD_OK","source":"a.png"}"#).expect("ok"),
            Some(ScriptEvent::LoadOk {
                source: Some("a.png".into())
            })
        );
        assert_eq!(
            ScriptEvent::parse_line(r#"{"type":"LOAD_ERROR"}"#).expect("ok"),
            Some(ScriptEvent::LoadError { source: None })
        );
        let update = ScriptEvent::parse_line(
            r#"{"type":"SETTINGS_UPDATE","settings":{"borderRadius":4}}"#,
        )
        .expect("ok");
        assert!(matches!(
            update,
            Some(ScriptEvent::SettingsUpdate { settings }) if settings.border_radius == Some(4.0)
        ));
    }

    #[test]
    fn unknown_event_is_an_error() {
        assert!(ScriptEvent::parse_line(r#"{"type":"EXPLODE"}"#).is_err());
    }

    #[test]
    fn load_events_resolve_active_source() {
        let message = ScriptEvent::LoadOk { source: None }.into_message(Some("cur.png"));
        assert_eq!(
            message,
            Some(Message::LoadSucceeded {
                source: "cur.png".into()
            })
        );
        assert_eq!(ScriptEvent::LoadError { source: None }.into_message(None), None);
        assert_eq!(
            ScriptEvent::LoadError {
                source: Some("old.png".into())
            }
            .into_message(Some("cur.png")),
            Some(Message::LoadFailed {
                source: "old.png".into()
            })
        );
    }
}
