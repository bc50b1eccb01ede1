use crate::interfaces::Actor;
use crate::objects::AnyNode;
use crate::objects::RepositoryOwnerKind;
use crate::objects::UserAccount;
use crate::tests::assert_valid_graphql;
use crate::tests::mock_github;
use libgithub_core::error::ClientError;
use libgithub_core::error::GraphQLErrorKind;
use libgithub_core::object::Node;
use libgithub_core::object::Object;
use libgithub_core::transport::ErrorPayload;
use libgithub_core::transport::GraphQLResponse;
use libgithub_core::transport::Variables;
use serde_json::json;

#[tokio::test]
async fn requested_license_fields_load_without_further_requests() {
    let (transport, github) = mock_github();
    transport.push_data(json!({
        "license": {"key": "mit", "body": "...", "__typename": "License"},
    }));

    let mut license = github.fetch_license("mit", Some(&["key", "body"])).await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.query, "\
query FetchLicense ($key: String!) {
  license(key: $key) {
    key
    body
    __typename
  }
}");
    assert_eq!(request.operation_name.as_deref(), Some("FetchLicense"));
    assert_eq!(request.variables["key"], json!("mit"));

    assert_eq!(license.key(), Ok("mit".to_string()));
    assert_eq!(license.body(), Ok("...".to_string()));
    assert_eq!(license.fetch_body().await, Ok("...".to_string()));
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn null_repository_is_not_found() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"repository": null}));

    let err = github.fetch_repository("nope", "nope", None).await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        ClientError::GraphQL(err) => assert_eq!(
            err.message,
            r#"Could not resolve to a `repository` with the owner "nope" and the name "nope"."#,
        ),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn not_found_errors_are_classified() {
    let (transport, github) = mock_github();
    transport.push_response(GraphQLResponse {
        data: Some(json!({"repository": null})),
        errors: vec![
            ErrorPayload::new("Could not resolve to a Repository with the name 'nope/nope'.")
                .with_type("NOT_FOUND"),
        ],
        extensions: None,
    });

    let err = github.fetch_repository("nope", "nope", None).await.unwrap_err();

    assert_eq!(err.graphql_kind(), Some(&GraphQLErrorKind::NotFound));
}

#[tokio::test]
async fn default_repository_query_selects_every_declared_field() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"repository": {
        "__typename": "Repository",
        "id": "R_1",
        "name": "rust",
        "nameWithOwner": "rust-lang/rust",
    }}));

    let repository = github.fetch_repository("rust-lang", "rust", None).await.unwrap();

    let query = &transport.requests()[0].query;
    assert_valid_graphql(query);
    assert!(query.starts_with(
        "query FetchRepository ($owner: String!, $name: String!) {\n  \
        repository(owner: $owner, name: $name) {\n    createdAt\n",
    ));
    assert!(query.contains("    licenseInfo{__typename,id,key,name,spdxId,url}\n"));
    assert!(query.contains("    stargazerCount\n"));
    assert!(query.contains("    resourcePath\n"));
    assert_eq!(repository.name_with_owner(), Ok("rust-lang/rust".to_string()));
    assert_eq!(repository.id(), Ok("R_1".to_string()));
}

#[tokio::test]
async fn mismatched_root_typename_is_rejected() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"repository": {"__typename": "Issue", "id": "I_1"}}));

    let err = github.fetch_repository("rust-lang", "rust", None).await.unwrap_err();

    assert_eq!(err, ClientError::UnexpectedTypename {
        expected: "Repository",
        typename: "Issue".to_string(),
    });
}

#[tokio::test]
async fn synthetic_license_fetches_through_its_key() {
    let (transport, github) = mock_github();
    transport.push_data(json!({
        "license": {"spdxId": "MIT", "__typename": "License"},
    }));
    let mut license = github.license("mit");
    assert_eq!(transport.request_count(), 0);

    assert_eq!(license.fetch_spdx_id().await, Ok(Some("MIT".to_string())));
    assert_eq!(license.fetch_spdx_id().await, Ok(Some("MIT".to_string())));

    assert_eq!(transport.request_count(), 1);
    assert!(transport.requests()[0].query.contains("license(key: $key)"));
}

#[tokio::test]
async fn viewer_is_always_authenticated() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"viewer": {
        "__typename": "User",
        "id": "U_1",
        "login": "octocat",
    }}));

    let viewer = github.fetch_viewer(Some(&["login"])).await.unwrap();

    assert_eq!(viewer.login(), Ok("octocat".to_string()));
    assert_eq!(transport.requests()[0].query, "\
query FetchViewer {
  viewer {
    login
    __typename
  }
}");
}

#[tokio::test]
async fn user_root_promotes_the_viewer() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"user": {
        "__typename": "User",
        "isViewer": true,
        "login": "octocat",
    }}));
    transport.push_data(json!({"user": {
        "__typename": "User",
        "isViewer": false,
        "login": "hubot",
    }}));

    let octocat = github.fetch_user("octocat", Some(&["login"])).await.unwrap();
    let hubot = github.fetch_user("hubot", Some(&["login"])).await.unwrap();

    assert!(matches!(octocat, UserAccount::Authenticated(_)));
    assert!(matches!(hubot, UserAccount::User(_)));
    assert_eq!(hubot.as_user().login(), Ok("hubot".to_string()));
    assert!(transport.requests()[0].query.contains("    login\n    isViewer\n    __typename\n"));
}

#[tokio::test]
async fn repository_owner_root_selects_each_owner_type() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"repositoryOwner": {
        "__typename": "Organization",
        "id": "O_1",
        "login": "rust-lang",
        "websiteUrl": "https://www.rust-lang.org",
    }}));

    let owner =
        github.fetch_repository_owner("rust-lang", Some(&["login", "website_url"]))
            .await
            .unwrap();

    let query = &transport.requests()[0].query;
    assert_valid_graphql(query);
    assert_eq!(query, "\
query FetchRepositoryOwner ($login: String!) {
  repositoryOwner(login: $login) {
    ... on User {
      login
      websiteUrl
      __typename
    }
    ... on Organization {
      login
      websiteUrl
      __typename
    }
    id
    __typename
  }
}");
    match owner {
        RepositoryOwnerKind::Organization(org) => {
            assert_eq!(
                org.website_url(),
                Ok(Some("https://www.rust-lang.org".to_string())),
            );
            assert_eq!(org.login(), Ok("rust-lang".to_string()));
        },
        other => panic!("Unexpected owner: {other:?}"),
    }
}

#[tokio::test]
async fn licenses_skip_null_entries() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"licenses": [
        {"__typename": "License", "key": "mit"},
        null,
        {"__typename": "License", "key": "apache-2.0"},
    ]}));

    let licenses = github.fetch_licenses(Some(&["key"])).await.unwrap();

    assert_eq!(
        licenses.iter().map(|license| license.key().unwrap()).collect::<Vec<_>>(),
        vec!["mit", "apache-2.0"],
    );
}

#[tokio::test]
async fn thin_node_is_fetched_by_id() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"node": {"__typename": "Repository", "id": "R_1"}}));

    let node = github.fetch_node("R_1", None).await.unwrap();

    assert_eq!(transport.requests()[0].query, "\
query FetchNode ($id: ID!) {
  node(id: $id) {
    id
    __typename
  }
}");
    match node {
        AnyNode::Repository(repository) => assert_eq!(repository.id(), Ok("R_1".to_string())),
        other => panic!("Unexpected node: {other:?}"),
    }
}

#[tokio::test]
async fn node_fields_are_requested_per_node_type() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"node": {"__typename": "License", "id": "L_1", "key": "mit"}}));

    github.fetch_node("L_1", Some(&["key"])).await.unwrap();

    let query = &transport.requests()[0].query;
    assert_valid_graphql(query);
    assert!(query.contains("    ... on License {\n      key\n      __typename\n    }\n"));
    assert!(!query.contains("... on Bot"));
    assert!(!query.contains("... on User"));
}

#[tokio::test]
async fn owner_fragments_only_select_fields_of_their_type() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"repositoryOwner": {
        "__typename": "User",
        "id": "U_1",
        "login": "octocat",
        "bio": "There once was...",
    }}));

    github.fetch_repository_owner("octocat", Some(&["login", "bio"])).await.unwrap();

    let query = &transport.requests()[0].query;
    assert_valid_graphql(query);
    assert!(query.contains(
        "    ... on User {\n      login\n      bio\n      __typename\n    }\n",
    ));
    assert!(query.contains(
        "    ... on Organization {\n      login\n      __typename\n    }\n",
    ));
}

#[tokio::test]
async fn raw_selectors_reach_every_node_fragment() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"node": {"__typename": "License", "id": "L_1", "key": "mit"}}));

    github.fetch_node("L_1", Some(&["key", "viewerCanReact"])).await.unwrap();

    let query = &transport.requests()[0].query;
    assert!(query.contains("    ... on License {\n      key\n      viewerCanReact\n"));
    assert!(query.contains("    ... on Bot {\n      viewerCanReact\n      __typename\n    }\n"));
}

#[tokio::test]
async fn unknown_node_types_keep_their_payload() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"nodes": [
        {"__typename": "Gist", "id": "G_1"},
        null,
        {"__typename": "User", "id": "U_1"},
    ]}));

    let nodes = github.fetch_nodes(&["G_1", "nope", "U_1"], None).await.unwrap();

    assert_eq!(transport.requests()[0].variables["ids"], json!(["G_1", "nope", "U_1"]));
    assert_eq!(nodes.len(), 3);
    match &nodes[0] {
        Some(AnyNode::Other(payload)) => assert_eq!(payload.typename(), Some("Gist")),
        other => panic!("Unexpected node: {other:?}"),
    }
    assert!(nodes[1].is_none());
    assert_eq!(nodes[2].as_ref().and_then(AnyNode::typename), Some("User"));
}

#[tokio::test]
async fn raw_queries_return_data() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"rateLimit": {"remaining": 4999}}));

    let data =
        github.query("query { rateLimit { remaining } }", Variables::new())
            .await
            .unwrap();

    assert_eq!(data["rateLimit"]["remaining"], 4999);
    assert_eq!(transport.requests()[0].operation_name, None);
}

#[tokio::test]
async fn lazily_fetched_organization_field_uses_the_login() {
    let (transport, github) = mock_github();
    transport.push_data(json!({"organization": {
        "__typename": "Organization",
        "login": "rust-lang",
    }}));
    transport.push_data(json!({"organization": {
        "__typename": "Organization",
        "description": "Empowering everyone to build reliable and efficient software.",
    }}));

    let mut org = github.fetch_organization("rust-lang", Some(&["login"])).await.unwrap();
    let description = org.fetch_description().await.unwrap();

    assert_eq!(
        description.as_deref(),
        Some("Empowering everyone to build reliable and efficient software."),
    );
    let request = &transport.requests()[1];
    assert!(request.query.contains("organization(login: $login) {\n    description\n"));
    assert_eq!(request.variables["login"], json!("rust-lang"));
    assert!(org.has_field("description"));
}
