mod client_tests;
mod http_tests;

use crate::GitHub;
use libgithub_core::transport::MockTransport;
use libgithub_core::transport::Requester;
use std::sync::Arc;

fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

fn mock_github() -> (Arc<MockTransport>, GitHub) {
    init_test_logging();
    let transport = Arc::new(MockTransport::new());
    let github = GitHub::with_requester(Requester::from_arc(transport.clone()));
    (transport, github)
}

fn assert_valid_graphql(document: &str) {
    if let Err(err) = graphql_parser::parse_query::<String>(document) {
        panic!("Generated document failed to parse: {err}\n\n{document}");
    }
}
