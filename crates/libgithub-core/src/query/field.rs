use crate::query::QueryNode;
use serde::Deserialize;
use serde::Serialize;

/// A terminal selection, optionally aliased.
///
/// The name is emitted verbatim, so a full selector such as
/// `conditions{description,key,label}` is a valid [`Field`] name.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    name: String,
}
impl Field {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn build(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{alias}: {}", self.name),
            None => self.name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
impl QueryNode for Field {
    const NODE_KIND: &'static str = "Field";
}
