// SPDX-License-Identifier: MPL-2.0
//! Host message decoding.
//!
//! A host posts `{"type": "SETTINGS_UPDATE", "settings": {...}}`. Any other
//! `type`, or a missing `settings` object, is not addressed to the widget
//! and is ignored. There is no schema versioning.

use crate::error::Result;
use crate::settings::SettingsPatch;
use serde_json::Value;

/// Message tag of a settings update.
pub const SETTINGS_UPDATE: &str = "SETTINGS_UPDATE";

/// Decodes a host message.
///
/// Returns `Ok(None)` for messages that are not settings updates.
///
/// # Errors
///
/// Returns [`Error::Message`](crate::error::Error::Message) if `json` is not
/// valid JSON, or a settings field has an unusable shape (e.g. a number for
/// `imageUrl`).
pub fn decode_settings_update(json: &str) -> Result<Option<SettingsPatch>> {
    let value: Value = serde_json::from_str(json)?;
    decode_settings_value(value)
}

/// Same as [`decode_settings_update`] for an already parsed value.
///
/// # Errors
///
/// Returns an error if a settings field has an unusable shape.
pub fn decode_settings_value(value: Value) -> Result<Option<SettingsPatch>> {
    let Value::Object(mut message) = value else {
        return Ok(None);
    };
    if message.get("type").and_then(Value::as_str) != Some(SETTINGS_UPDATE) {
        return Ok(None);
    }
    match message.remove("settings") {
        Some(settings @ Value::Object(_)) => Ok(Some(serde_json::from_value(settings)?)),
        _ => {
            log::debug!("{SETTINGS_UPDATE} without a settings object, ignoring");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn decodes_settings_update() {
        let patch = decode_settings_update(
            r#"{"type":"SETTINGS_UPDATE","settings":{"imageUrl":"https://x.test/a.png"}}"#,
        )
        .expect("valid")
        .expect("settings update");
        assert_eq!(patch.image_url.as_deref(), Some("https://x.test/a.png"));
    }

    #[test]
    fn ignores_other_message_types() {
        assert_eq!(
            decode_settings_update(r#"{"type":"PING","settings":{}}"#).expect("valid"),
            None
        );
        assert_eq!(decode_settings_update(r#"[1, 2]"#).expect("valid"), None);
        assert_eq!(decode_settings_update(r#"{"settings":{}}"#).expect("valid"), None);
    }

    #[test]
    fn ignores_update_without_settings_object() {
        assert_eq!(
            decode_settings_update(r#"{"type":"SETTINGS_UPDATE"}"#).expect("valid"),
            None
        );
        assert_eq!(
            decode_settings_update(r#"{"type":"SETTINGS_UPDATE","settings":null}"#)
                .expect("valid"),
            None
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = decode_settings_update("{not json").unwrap_err();
        assert!(matches!(err, Error::Message(_)));
    }

    #[test]
    fn wrong_url_type_is_an_error() {
        let result = decode_settings_update(r#"{"type":"SETTINGS_UPDATE","settings":{"imageUrl":5}}"#);
        assert!(result.is_err());
    }
}
