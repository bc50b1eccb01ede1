use thiserror::Error;

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// A field that is not part of an object's payload, as opposed to one that
/// was loaded and is `null`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error(
    "The `{field}` field of this `{type_name}` was not loaded. Request it \
    when fetching the object, or use the matching `fetch_*` method."
)]
pub struct MissingField {
    pub field: String,
    pub type_name: &'static str,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FieldError {
    #[error("The `{field}` field of this `{type_name}` could not be decoded: {message}")]
    Malformed {
        field: String,
        message: String,
        type_name: &'static str,
    },

    #[error(transparent)]
    Missing(#[from] MissingField),
}
impl FieldError {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}
