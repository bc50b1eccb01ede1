use crate::error::ClientError;
use crate::transport::GraphQLRequest;
use crate::transport::GraphQLResponse;
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/// A [`Transport`] that replays queued responses in order and records every
/// request it receives.
///
/// Useful for exercising code that talks to GitHub without a network: queue
/// the envelopes the server would send, run the code, then inspect
/// [`MockTransport::requests()`].
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<GraphQLRequest>>,
    responses: Mutex<VecDeque<Result<GraphQLResponse, ClientError>>>,
}
impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful envelope whose `data` member is `data`.
    pub fn push_data(&self, data: Value) -> &Self {
        self.push_response(GraphQLResponse::from_data(data))
    }

    /// Queue a transport-level failure.
    pub fn push_error(&self, error: ClientError) -> &Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    pub fn push_response(&self, response: GraphQLResponse) -> &Self {
        lock(&self.responses).push_back(Ok(response));
        self
    }

    pub fn remaining(&self) -> usize {
        lock(&self.responses).len()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<GraphQLRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: &GraphQLRequest,
    ) -> Result<GraphQLResponse, ClientError> {
        lock(&self.requests).push(request.to_owned());
        lock(&self.responses).pop_front().unwrap_or_else(|| {
            Err(ClientError::Transport {
                message: format!(
                    "No response was queued for request #{}.",
                    self.request_count(),
                ),
            })
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
