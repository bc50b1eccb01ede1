use crate::query::QueryBuildError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Conversions shared by every node of a query document.
///
/// The dictionary form is a plain JSON object mirroring the node's fields
/// (`"type"` for type conditions and variable types), which makes document
/// trees storable and editable outside of Rust code.
pub trait QueryNode: Clone + DeserializeOwned + Serialize {
    const NODE_KIND: &'static str;

    /// An independent copy of this node and everything nested under it.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn from_dict(dict: &serde_json::Value) -> Result<Self, QueryBuildError> {
        serde_json::from_value(dict.to_owned()).map_err(|err| QueryBuildError::InvalidDict {
            message: err.to_string(),
            node_kind: Self::NODE_KIND,
        })
    }

    fn to_dict(&self) -> Result<serde_json::Value, QueryBuildError> {
        serde_json::to_value(self).map_err(|err| QueryBuildError::DictEncoding {
            message: err.to_string(),
            node_kind: Self::NODE_KIND,
        })
    }
}
