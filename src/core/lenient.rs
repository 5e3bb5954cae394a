//! Forgiving `deserialize_with` helpers for host-supplied chart payloads.
//!
//! A malformed field falls back to its default instead of failing the whole
//! config; only JSON that does not parse at all is an error.

use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum OrIgnored<T> {
    Value(T),
    Ignored(IgnoredAny),
}

impl<T> OrIgnored<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Ignored(_) => None,
        }
    }
}

/// Any non-array reads as an empty list; entries that do not fit `T` are skipped.
pub(crate) fn sequence_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(sequence_or_none(deserializer)?.unwrap_or_default())
}

/// Like [`sequence_or_empty`], but a non-array reads as `None`.
pub(crate) fn sequence_or_none<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = OrIgnored::<Vec<OrIgnored<T>>>::deserialize(deserializer)?.into_option();
    Ok(items.map(|items| items.into_iter().filter_map(OrIgnored::into_option).collect()))
}

pub(crate) fn value_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(value_or_none(deserializer)?.unwrap_or_default())
}

pub(crate) fn value_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(OrIgnored::<T>::deserialize(deserializer)?.into_option())
}

/// Strings are kept, numbers and booleans are printed, anything else is empty.
pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_text(Value::deserialize(deserializer)?))
}

/// A list of [`text_or_empty`] entries; positions are preserved.
pub(crate) fn texts_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(display_text).collect(),
        _ => Vec::new(),
    })
}

/// JSON numbers only.
pub(crate) fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        _ => None,
    })
}

/// JSON numbers floored to a count; negatives read as zero.
pub(crate) fn count_or_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = number_or_none(deserializer)?
        .filter(|value| value.is_finite())
        .map(|value| value.floor().max(0.0) as usize);
    Ok(count)
}

fn display_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number
            .as_f64()
            .map_or_else(|| number.to_string(), |value| value.to_string()),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
