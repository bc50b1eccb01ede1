use crate::error::ClientError;
use crate::error::GraphQLError;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// The variables of a request, keyed by variable name (without the `$`).
pub type Variables = serde_json::Map<String, Value>;

/// The JSON body POSTed to a GraphQL endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub query: String,
    #[serde(default, skip_serializing_if = "Variables::is_empty")]
    pub variables: Variables,
}
impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            operation_name: None,
            query: query.into(),
            variables: Variables::new(),
        }
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }
}

/// The standard `{data, errors, extensions}` response envelope.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct GraphQLResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}
impl GraphQLResponse {
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Default::default()
        }
    }

    pub fn from_errors(errors: Vec<ErrorPayload>) -> Self {
        Self {
            errors,
            ..Default::default()
        }
    }

    /// The `data` member of a successful response.
    ///
    /// Any entry in `errors` fails the whole response, even when partial
    /// data came along with it; the partial data is kept on the resulting
    /// [`GraphQLError`] for diagnostics.
    pub fn into_data(self) -> Result<Value, ClientError> {
        if !self.errors.is_empty() {
            return Err(GraphQLError::from_payloads(self.errors, self.data).into());
        }
        match self.data {
            Some(Value::Null) | None => Err(GraphQLError::internal(
                "The response carried neither data nor errors.",
            ).into()),
            Some(data) => Ok(data),
        }
    }
}

/// One entry of a response's `errors` list.
///
/// GitHub adds a `type` discriminator (`NOT_FOUND`, `FORBIDDEN`, ...) next
/// to the standard members; it drives error classification.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ErrorPayload {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ErrorLocation>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
}
impl ErrorPayload {
    /// The classification discriminator: the `type` member when present,
    /// otherwise `extensions.code`.
    pub fn discriminator(&self) -> Option<&str> {
        self.error_type.as_deref().or_else(|| {
            self.extensions.as_ref()?.get("code")?.as_str()
        })
    }

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorLocation {
    pub column: u32,
    pub line: u32,
}
