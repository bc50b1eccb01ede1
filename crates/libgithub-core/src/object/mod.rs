mod base;
mod fetchable;
mod field_error;
mod from_payload;
mod locator;
mod object_trait;
mod payload;

pub use base::NODE;
pub use base::Node;
pub use base::TYPE;
pub use base::node_eq;
pub use fetchable::Fetchable;
pub use field_error::FieldError;
pub use field_error::FieldResult;
pub use field_error::MissingField;
pub use from_payload::FromPayload;
pub use from_payload::check_typename;
pub use locator::Locator;
pub use object_trait::Object;
pub use payload::Payload;

#[cfg(test)]
mod tests;
