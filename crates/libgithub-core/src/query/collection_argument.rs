use crate::query::QueryNode;
use serde::Deserialize;
use serde::Serialize;

/// An argument passed to a nested selection: `name: value`.
///
/// Unlike a [`QueryArgument`](crate::query::QueryArgument), this declares
/// nothing; `value` is emitted as written and is usually a reference to a
/// document variable.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionArgument {
    name: String,
    value: String,
}
impl CollectionArgument {
    pub fn build(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `name: "value"`, with `value` escaped as a GraphQL string literal.
    pub fn string(name: impl Into<String>, value: impl AsRef<str>) -> Self {
        // JSON string escaping is a subset of what GraphQL string literals
        // accept.
        let literal = serde_json::Value::String(value.as_ref().to_owned());
        Self::new(name, literal.to_string())
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// `name: $variable`
    pub fn variable(name: impl Into<String>, variable: impl AsRef<str>) -> Self {
        Self::new(name, format!("${}", variable.as_ref()))
    }
}
impl QueryNode for CollectionArgument {
    const NODE_KIND: &'static str = "CollectionArgument";
}
