use crate::error::ClientError;
use crate::error::GraphQLError;
use crate::query::Builder;
use crate::transport::GraphQLRequest;
use crate::transport::Transport;
use crate::transport::Variables;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ClientError>;

/// A cheaply cloneable handle to a [`Transport`], shared by a client and
/// every object it materializes so that lazy fetches reach the same
/// endpoint.
#[derive(Clone)]
pub struct Requester {
    transport: Arc<dyn Transport>,
}
impl Requester {
    /// Build `builder` and dispatch it under its operation name.
    pub async fn execute(
        &self,
        builder: &Builder,
        variables: Variables,
    ) -> Result<Value> {
        let document = builder.build()?;
        self.request(&document, builder.name(), variables).await
    }

    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Dispatch a document and return the `data` member of the response.
    ///
    /// Any `errors` in the response fail the call with a classified
    /// [`GraphQLError`]; transport failures propagate unchanged.
    pub async fn request(
        &self,
        document: &str,
        operation: Option<&str>,
        variables: Variables,
    ) -> Result<Value> {
        let mut request = GraphQLRequest::new(document).with_variables(variables);
        if let Some(operation) = operation {
            request = request.with_operation_name(operation);
        }

        log::debug!(
            "Dispatching the `{}` operation with {} variable(s).",
            operation.unwrap_or("anonymous"),
            request.variables.len(),
        );
        log::trace!("Document:\n{document}");

        let response = self.transport.execute(&request).await?;
        let data = response.into_data();
        if let Err(err) = &data {
            log::debug!(
                "The `{}` operation failed: {err}",
                operation.unwrap_or("anonymous"),
            );
        }
        data
    }

    /// Like [`Requester::request()`], then runs `validate` over the returned
    /// data. A validation failure is reported as an internal
    /// [`GraphQLError`] that carries the rejected data.
    pub async fn request_validated<F>(
        &self,
        document: &str,
        operation: Option<&str>,
        variables: Variables,
        validate: F,
    ) -> Result<Value>
    where
        F: FnOnce(&Value) -> std::result::Result<(), String>,
    {
        let data = self.request(document, operation, variables).await?;
        if let Err(message) = validate(&data) {
            let mut err = GraphQLError::internal(message);
            err.data = Some(data);
            return Err(err.into());
        }
        Ok(data)
    }
}
impl fmt::Debug for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requester").finish_non_exhaustive()
    }
}
