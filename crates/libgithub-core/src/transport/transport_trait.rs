use crate::error::ClientError;
use crate::transport::GraphQLRequest;
use crate::transport::GraphQLResponse;
use async_trait::async_trait;

/// Sends one GraphQL request and returns the decoded response envelope.
///
/// Implementations report HTTP-level failures themselves
/// ([`ClientError::Unauthorized`], [`ClientError::Http`],
/// [`ClientError::Transport`]) and hand every decoded envelope back as-is,
/// including ones that carry `errors`: classifying those is left to the
/// [`Requester`](crate::transport::Requester).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        request: &GraphQLRequest,
    ) -> Result<GraphQLResponse, ClientError>;
}
