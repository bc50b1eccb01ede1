mod builder;
mod collection;
mod collection_argument;
mod field;
mod fragment;
mod indent;
mod operation_kind;
mod query_argument;
mod query_build_error;
mod query_node;
mod selection_set_trait;

pub use builder::Builder;
pub use collection::Collection;
pub use collection_argument::CollectionArgument;
pub use field::Field;
pub use fragment::Fragment;
pub use operation_kind::OperationKind;
pub use query_argument::QueryArgument;
pub use query_build_error::QueryBuildError;
pub use query_node::QueryNode;
use selection_set_trait::SelectionSetTrait;

#[cfg(test)]
mod tests;
