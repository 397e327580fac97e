//! Serde helper functions for CMS content deserialization.
//!
//! Authored content is loosely typed: editors leave blank strings where a value is
//! optional, and ids or weights can be stored as numbers or strings depending on the
//! tool that wrote them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::coerce::{to_js_number, to_js_string};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize any JSON value as a string, using `String(x)` semantics.
pub fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_js_string(&value))
}

/// Deserialize any JSON value as a number, using `Number(x)` semantics.
/// Values with no numeric reading become NaN instead of failing.
pub fn deserialize_loose_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_js_number(&value))
}
