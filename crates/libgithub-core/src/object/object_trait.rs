use crate::fields::Declaration;
use crate::object::FieldError;
use crate::object::FieldResult;
use crate::object::MissingField;
use crate::object::Payload;
use serde::de::DeserializeOwned;

/// A typed view over a [`Payload`].
///
/// Accessors read fields by their friendly name, which is translated through
/// the type's [`Declaration`] into the key the server answers with.
pub trait Object {
    const DECLARATION: &'static Declaration;

    fn payload(&self) -> &Payload;

    fn payload_mut(&mut self) -> &mut Payload;

    /// Decode the field named `name` from the payload.
    ///
    /// Nullable fields should be decoded as an `Option`: a `null` decodes to
    /// `None`, while a field that was never loaded is a
    /// [`FieldError::Missing`] either way.
    fn field<T: DeserializeOwned>(&self, name: &str) -> FieldResult<T> {
        let declaration = Self::DECLARATION;
        let key = declaration.response_key(name);
        let value = self.payload().get(key).ok_or_else(|| MissingField {
            field: name.to_string(),
            type_name: declaration.type_name(),
        })?;

        T::deserialize(value).map_err(|err| FieldError::Malformed {
            field: name.to_string(),
            message: err.to_string(),
            type_name: declaration.type_name(),
        })
    }

    fn has_field(&self, name: &str) -> bool {
        self.payload().contains_key(Self::DECLARATION.response_key(name))
    }

    fn typename(&self) -> Option<&str> {
        self.payload().typename()
    }
}
