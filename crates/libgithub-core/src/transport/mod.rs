mod envelope;
mod mock_transport;
mod requester;
mod transport_trait;

pub use envelope::ErrorLocation;
pub use envelope::ErrorPayload;
pub use envelope::GraphQLRequest;
pub use envelope::GraphQLResponse;
pub use envelope::Variables;
pub use mock_transport::MockTransport;
pub use requester::Requester;
pub use transport_trait::Transport;

#[cfg(test)]
mod tests;
