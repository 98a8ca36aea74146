// SPDX-License-Identifier: MPL-2.0
//! Tolerant field deserializers for host payloads.
//!
//! Host pages often send slider values as strings (`"12"`) or booleans as
//! `"true"`. A value of the wrong shape is treated as absent instead of
//! rejecting the whole update.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Text(String),
    Other(IgnoredAny),
}

/// Accepts a number or a numeric string; anything else becomes `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberLike::deserialize(deserializer)? {
        NumberLike::Number(value) => Some(value),
        NumberLike::Text(text) => text.trim().parse::<f64>().ok(),
        NumberLike::Other(_) => None,
    }
    .filter(|value| value.is_finite()))
}

/// Accepts a boolean or `"true"`/`"false"`; anything else becomes `None`.
pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(value) => Some(value),
        BoolLike::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" => Some(true),
            "false" | "0" | "off" => Some(false),
            _ => None,
        },
        BoolLike::Other(_) => None,
    })
}
