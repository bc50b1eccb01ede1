use crate::query::QueryNode;
use serde::Deserialize;
use serde::Serialize;

/// A variable declared by the document itself: `$name: Type = default`.
///
/// `default` is emitted as written, so string defaults must carry their own
/// quotes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QueryArgument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<String>,
    name: String,
    #[serde(rename = "type")]
    type_annotation: String,
}
impl QueryArgument {
    pub fn build(&self) -> String {
        match &self.default {
            Some(default) => format!(
                "${}: {} = {default}",
                self.name,
                self.type_annotation,
            ),
            None => format!("${}: {}", self.name, self.type_annotation),
        }
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<String>,
    ) -> Self {
        Self {
            default: None,
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}
impl QueryNode for QueryArgument {
    const NODE_KIND: &'static str = "QueryArgument";
}
