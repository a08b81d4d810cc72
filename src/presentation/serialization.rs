/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Lenient deserializers for the loosely typed JSON a PHP/MySQL backend emits.
//!
//! Numeric columns frequently arrive as strings (`"12"`), booleans as `0`/`1`
//! or `"0"`/`"1"`, and missing values as `null` or `""`.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

fn value_as_u64<E: de::Error>(value: &Value) -> Result<Option<u64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| E::custom(format!("expected unsigned integer, got {n}"))),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| E::custom(format!("invalid integer string: {s}"))),
        other => Err(E::custom(format!("expected integer, got {other}"))),
    }
}

fn value_as_f64<E: de::Error>(value: &Value) -> Result<Option<f64>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::custom(format!("invalid float string: {s}"))),
        other => Err(E::custom(format!("expected number, got {other}"))),
    }
}

/// Deserializes a required id that may be a number or a numeric string
pub fn string_or_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_u64(&value)?.ok_or_else(|| de::Error::custom("missing integer value"))
}

/// Deserializes an optional integer that may be a number, a numeric string, `""` or `null`
pub fn string_or_u64_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_u64(&value)
}

/// Deserializes an optional float that may be a number, a numeric string, `""` or `null`
pub fn string_or_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_f64(&value)
}

/// Deserializes a boolean encoded as `true`/`false`, `0`/`1` or `"0"`/`"1"`
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "no" => Ok(false),
            "1" | "true" | "yes" => Ok(true),
            other => Err(de::Error::custom(format!("invalid boolean string: {other}"))),
        },
        other => Err(de::Error::custom(format!("expected boolean, got {other}"))),
    }
}

/// Deserializes a list of ids given as numbers or numeric strings
///
/// `null` decodes as an empty list; `null` and blank entries are skipped.
pub fn vec_string_or_u64<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => {
            let mut ids = Vec::with_capacity(items.len());
            for item in &items {
                if let Some(id) = value_as_u64(item)? {
                    ids.push(id);
                }
            }
            Ok(ids)
        }
        other => Err(de::Error::custom(format!("expected list of ids, got {other}"))),
    }
}

/// Deserializes a string-valued enum, falling back to `T::default()`
///
/// Covers `null`, blank strings and values the client does not know about;
/// matching is case-insensitive.
pub fn lenient_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_ascii_lowercase(),
        Value::Null => return Ok(T::default()),
        other => {
            debug!("Unexpected enum value {}, using default", other);
            return Ok(T::default());
        }
    };
    if raw.is_empty() {
        return Ok(T::default());
    }
    match serde_json::from_value(Value::String(raw)) {
        Ok(value) => Ok(value),
        Err(e) => {
            debug!("Unknown enum value ({}), using default", e);
            Ok(T::default())
        }
    }
}

/// Deserializes an optional string, mapping `""` to `None`
pub fn option_string_empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}
