use crate::ClientConfig;
use crate::GitHub;
use crate::http::HttpTransport;
use crate::interfaces::Actor;
use crate::tests::init_test_logging;
use libgithub_core::error::ClientError;
use libgithub_core::error::GraphQLErrorKind;
use libgithub_core::transport::GraphQLRequest;
use libgithub_core::transport::Transport;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::body_partial_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;

async fn github_at(server: &MockServer) -> GitHub {
    init_test_logging();
    let config =
        ClientConfig::default()
            .with_endpoint(format!("{}/graphql", server.uri()))
            .with_token("ghp_test")
            .with_user_agent("libgithub-tests");
    GitHub::new(&config).unwrap()
}

#[tokio::test]
async fn requests_carry_the_token_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "bearer ghp_test"))
        .and(header("user-agent", "libgithub-tests"))
        .and(body_partial_json(json!({"operationName": "FetchViewer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"viewer": {"__typename": "User", "login": "octocat", "isViewer": true}},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let viewer =
        github_at(&server).await
            .fetch_viewer(Some(&["login"]))
            .await
            .unwrap();

    assert_eq!(viewer.login(), Ok("octocat".to_string()));
}

#[tokio::test]
async fn bad_credentials_are_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/graphql",
        })))
        .mount(&server)
        .await;

    let err = github_at(&server).await.fetch_viewer(None).await.unwrap_err();

    assert_eq!(err, ClientError::Unauthorized {
        message: "Bad credentials".to_string(),
    });
}

#[tokio::test]
async fn other_http_failures_keep_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = github_at(&server).await.fetch_viewer(None).await.unwrap_err();

    assert_eq!(err, ClientError::Http {
        message: "upstream unavailable".to_string(),
        status: 502,
    });
}

#[tokio::test]
async fn graphql_errors_in_a_successful_response_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": null},
            "errors": [{
                "type": "NOT_FOUND",
                "path": ["user"],
                "locations": [{"line": 2, "column": 3}],
                "message": "Could not resolve to a User with the login of 'ghost-user'.",
            }],
        })))
        .mount(&server)
        .await;

    let err =
        github_at(&server).await
            .fetch_user("ghost-user", None)
            .await
            .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "not found: Could not resolve to a User with the login of 'ghost-user'.",
    );
}

#[tokio::test]
async fn undecodable_body_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;
    let config = ClientConfig::default().with_endpoint(server.uri());
    let transport = HttpTransport::new(&config).unwrap();

    let err =
        transport.execute(&GraphQLRequest::new("{ viewer { login } }"))
            .await
            .unwrap_err();

    assert!(matches!(err, ClientError::Transport { .. }));
    assert_eq!(err.graphql_kind(), None::<&GraphQLErrorKind>);
}
