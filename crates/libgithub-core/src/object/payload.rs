use crate::error::GraphQLError;
use crate::fields::TYPENAME;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// The JSON object an object is materialized from.
///
/// A key that is absent was never requested (or never loaded), while a key
/// mapped to `null` was loaded and is null: [`Payload::get()`] keeps the
/// two apart.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);
impl Payload {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Wrap `value`, which must be a JSON object.
    pub fn from_value(value: Value) -> Result<Self, GraphQLError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(GraphQLError::internal(format!(
                "Expected an object in the response but received {}.",
                describe(&other),
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overwrite this payload's keys with those of `patch`, keeping any key
    /// `patch` does not carry.
    pub fn merge(&mut self, patch: Payload) {
        for (key, value) in patch.0 {
            self.0.insert(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// The `__typename` the payload was returned with, if it was requested.
    pub fn typename(&self) -> Option<&str> {
        self.0.get(TYPENAME)?.as_str()
    }

    /// The `__typename` of a payload reached through a polymorphic
    /// selection, which always requests it.
    pub fn require_typename(&self) -> Result<&str, GraphQLError> {
        self.typename().ok_or_else(|| GraphQLError::internal(
            "A polymorphic object in the response lacks its `__typename`.",
        ))
    }
}
impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        payload.into_value()
    }
}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "a list",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
        Value::Number(_) => "a number",
        Value::Object(_) => "an object",
        Value::String(_) => "a string",
    }
}
