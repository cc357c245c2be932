use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Record;

/// Top-level object returned by `search` and `lookup`.
///
/// Decoding only insists on a JSON object. A missing or wrongly typed
/// `resultCount` reads as 0 and a missing or wrongly typed `results` reads as
/// empty; unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default, deserialize_with = "lenient_count")]
    pub result_count: i64,
    #[serde(default, deserialize_with = "lenient_results")]
    pub results: Vec<Record>,
}

impl Envelope {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            other => Err(<serde_json::Error as serde::de::Error>::custom(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().unwrap_or_default())
}

fn lenient_results<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(Record::new).collect(),
        _ => Vec::new(),
    })
}
