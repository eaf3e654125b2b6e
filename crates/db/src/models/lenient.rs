//! Deserializers for integer fields that browsers often send as strings.
//!
//! HTML `<select>` values and JSON object keys arrive as strings, so
//! `"3"` and `3` are both accepted wherever these helpers are used.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i64),
    Text(String),
}

pub fn i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

pub fn i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let wide = i64(deserializer)?;
    i32::try_from(wide).map_err(|_| D::Error::custom(format!("integer {wide} out of range")))
}
