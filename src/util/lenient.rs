//! Lenient deserializers for fields the backend encodes inconsistently.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrNumber {
    Bool(bool),
    Number(i64),
}

/// Accepts `1.5` as well as `"1.5"`; unparsable strings become `0.0`.
pub fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => value,
        NumberOrString::Text(text) => text.trim().parse().unwrap_or(0.0),
    })
}

/// Accepts `true`/`false` as well as `1`/`0`; `null` is treated as `false`.
pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<BoolOrNumber>::deserialize(deserializer)? {
        Some(BoolOrNumber::Bool(value)) => value,
        Some(BoolOrNumber::Number(value)) => value != 0,
        None => false,
    })
}
