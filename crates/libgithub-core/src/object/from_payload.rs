use crate::error::ClientError;
use crate::error::GraphQLError;
use crate::fields::Declaration;
use crate::object::Payload;
use crate::object::payload::describe;
use crate::transport::Requester;
use serde_json::Value;

/// Materialization of a typed object from a response payload.
pub trait FromPayload: Sized {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError>;

    /// Materialize a single object from a JSON value, which must be a JSON
    /// object.
    fn from_value(value: Value, requester: &Requester) -> Result<Self, ClientError> {
        Self::from_payload(Payload::from_value(value)?, requester)
    }

    /// Materialize each element of a JSON list, in order.
    fn from_values(value: Value, requester: &Requester) -> Result<Vec<Self>, ClientError> {
        match value {
            Value::Array(items) =>
                items.into_iter()
                    .map(|item| Self::from_value(item, requester))
                    .collect(),
            other => Err(GraphQLError::internal(format!(
                "Expected a list in the response but received {}.",
                describe(&other),
            )).into()),
        }
    }
}

/// Fails when `payload` carries a `__typename` other than the GraphQL type
/// of `declaration`. Payloads without a `__typename` pass.
pub fn check_typename(
    payload: &Payload,
    declaration: &'static Declaration,
) -> Result<(), ClientError> {
    match payload.typename() {
        Some(typename) if typename != declaration.graphql_type() => {
            Err(ClientError::UnexpectedTypename {
                expected: declaration.graphql_type(),
                typename: typename.to_string(),
            })
        },
        _ => Ok(()),
    }
}
