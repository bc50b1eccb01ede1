use crate::error::ClientError;
use crate::error::GraphQLErrorKind;
use crate::transport::ErrorLocation;
use crate::transport::GraphQLRequest;
use crate::transport::GraphQLResponse;
use crate::transport::Variables;
use serde_json::json;

#[test]
fn request_serializes_with_camel_case_members() {
    let mut variables = Variables::new();
    variables.insert("key".to_string(), json!("mit"));
    let request =
        GraphQLRequest::new("query FetchLicense ($key: String!) {}")
            .with_operation_name("FetchLicense")
            .with_variables(variables);

    assert_eq!(serde_json::to_value(&request).unwrap(), json!({
        "operationName": "FetchLicense",
        "query": "query FetchLicense ($key: String!) {}",
        "variables": {"key": "mit"},
    }));
}

#[test]
fn empty_variables_and_operation_name_are_omitted() {
    let request = GraphQLRequest::new("query { viewer { login } }");

    assert_eq!(serde_json::to_value(&request).unwrap(), json!({
        "query": "query { viewer { login } }",
    }));
}

#[test]
fn github_error_envelope_decodes() {
    let response: GraphQLResponse = serde_json::from_value(json!({
        "data": {"repository": null},
        "errors": [{
            "type": "NOT_FOUND",
            "path": ["repository"],
            "locations": [{"line": 2, "column": 3}],
            "message": "Could not resolve to a Repository with the name 'nope/nope'.",
        }],
    })).unwrap();

    assert_eq!(response.errors[0].error_type.as_deref(), Some("NOT_FOUND"));
    assert_eq!(response.errors[0].locations, vec![ErrorLocation { column: 3, line: 2 }]);
    assert_eq!(response.errors[0].path, vec![json!("repository")]);
}

#[test]
fn errors_fail_the_response_even_with_partial_data() {
    let response: GraphQLResponse = serde_json::from_value(json!({
        "data": {"repository": null},
        "errors": [{"type": "NOT_FOUND", "message": "Could not resolve."}],
    })).unwrap();

    match response.into_data() {
        Err(ClientError::GraphQL(err)) => {
            assert_eq!(err.kind, GraphQLErrorKind::NotFound);
            assert_eq!(err.data, Some(json!({"repository": null})));
        },
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn missing_data_without_errors_is_internal() {
    for response in [GraphQLResponse::default(), GraphQLResponse::from_data(json!(null))] {
        let err = response.into_data().unwrap_err();
        assert_eq!(err.graphql_kind(), Some(&GraphQLErrorKind::Internal));
    }
}

#[test]
fn data_is_returned_untouched() {
    let response = GraphQLResponse::from_data(json!({"viewer": {"login": "octocat"}}));

    assert_eq!(response.into_data(), Ok(json!({"viewer": {"login": "octocat"}})));
}
