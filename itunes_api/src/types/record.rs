use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the `results` array.
///
/// The API returns differently shaped objects depending on the media and
/// entity requested, so no schema is imposed. Fields are read by name with
/// a fallback for when the key is missing or holds another JSON type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw value under `key`. `None` when absent or when the record is not
    /// a JSON object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Integer field. Floats are not truncated; they yield the default.
    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(Value::as_i64).unwrap_or(default)
    }

    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
