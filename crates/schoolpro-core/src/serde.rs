use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

/// Accepts a JSON number or a numeric string (form inputs often send
/// `"5"`). A blank string counts as zero.
pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) if s.trim().is_empty() => 0,
        NumberOrString::String(s) => s.trim().parse::<i64>().map_err(serde::de::Error::custom)?,
    };

    i32::try_from(value).map_err(serde::de::Error::custom)
}
