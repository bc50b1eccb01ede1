use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryBuildError {
    #[error("Failed to encode a `{node_kind}` into its dictionary form: {message}")]
    DictEncoding {
        message: String,
        node_kind: &'static str,
    },

    #[error(
        "The `{argument_name}` argument was declared more than once on \
        `{parent_name}`."
    )]
    DuplicateArgument {
        argument_name: String,
        parent_name: String,
    },

    #[error(
        "The `{collection_name}` collection must select at least one \
        collection, field or fragment."
    )]
    EmptyCollection {
        collection_name: String,
    },

    #[error(
        "Documents must select at least one collection or field, but the \
        {} document selects neither.",
        .document_name.as_deref().unwrap_or("anonymous"),
    )]
    EmptyDocument {
        document_name: Option<String>,
    },

    #[error(
        "The `{fragment_name}` fragment on `{type_condition}` must select at \
        least one collection, field or fragment."
    )]
    EmptyFragment {
        fragment_name: String,
        type_condition: String,
    },

    #[error(
        "Inline fragments may only appear within a selection, but an inline \
        fragment on `{type_condition}` was added to the document root."
    )]
    InlineFragmentAtDocumentRoot {
        type_condition: String,
    },

    #[error(
        "The inline fragment on `{type_condition}` contains nested fragments, \
        which inline fragments cannot hold."
    )]
    InlineFragmentContainsFragments {
        type_condition: String,
    },

    #[error("Failed to decode a `{node_kind}` from its dictionary form: {message}")]
    InvalidDict {
        message: String,
        node_kind: &'static str,
    },
}
