// File: src/value.rs
// Purpose: The value shape every rule receives

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw value of a form field as handed over by the form layer
///
/// Rules only have an opinion about `Text`. `Absent` and `Other` always pass
/// every rule except where a rule documents otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// No value was supplied
    #[default]
    Absent,
    /// A string value (possibly empty)
    Text(String),
    /// Some non-string shape (number, bool, list...)
    Other(serde_json::Value),
}

impl FieldValue {
    /// The string content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text that is non-empty. Empty strings are treated like an absent value
    /// by the rules that only look at present content.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.as_text().filter(|s| !s.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Absent,
            serde_json::Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Other(other),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Absent => serde_json::Value::Null,
            FieldValue::Text(s) => serde_json::Value::String(s),
            FieldValue::Other(v) => v,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Absent => serializer.serialize_none(),
            FieldValue::Text(s) => serializer.serialize_str(s),
            FieldValue::Other(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.into())
    }
}
