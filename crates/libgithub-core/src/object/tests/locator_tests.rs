use crate::error::GraphQLErrorKind;
use crate::object::Locator;
use crate::object::tests::test_objects::LICENSE;
use crate::object::tests::test_objects::REPOSITORY;
use crate::test_utils::assert_valid_graphql;
use serde_json::json;

#[test]
fn node_locator_narrows_with_an_inline_fragment() {
    let locator = Locator::Node { id: "L_1".to_string() };

    let (builder, variables) =
        locator.query(&LICENSE, &LICENSE.merged_fields(Some(&["body"]))).unwrap();
    let document = builder.build().unwrap();

    assert_eq!(document, "\
query FetchLicenseFields ($id: ID!) {
  node(id: $id) {
    ... on License {
      body
      __typename
    }
  }
}");
    assert_valid_graphql(&document);
    assert_eq!(variables["id"], json!("L_1"));
}

#[test]
fn resource_locator_queries_by_url() {
    let locator = Locator::Resource { url: "https://github.com/rust-lang/rust".to_string() };

    let (builder, variables) =
        locator.query(&REPOSITORY, &REPOSITORY.merged_fields(Some(&["name"]))).unwrap();
    let document = builder.build().unwrap();

    assert_eq!(document, "\
query FetchRepositoryFields ($url: URI!) {
  resource(url: $url) {
    ... on Repository {
      name
      __typename
    }
  }
}");
    assert_valid_graphql(&document);
    assert_eq!(variables["url"], json!("https://github.com/rust-lang/rust"));
}

#[test]
fn keyed_locator_selects_directly() {
    let locator = Locator::Keyed {
        argument: "key",
        argument_type: "String!",
        root: "license",
        value: "mit".to_string(),
    };

    let (builder, _) =
        locator.query(&LICENSE, &LICENSE.merged_fields(Some(&["key", "body"]))).unwrap();
    let document = builder.build().unwrap();

    assert_eq!(document, "\
query FetchLicenseFields ($key: String!) {
  license(key: $key) {
    key
    body
    __typename
  }
}");
    assert_valid_graphql(&document);
}

#[test]
fn null_root_is_not_found() {
    let locator = Locator::Node { id: "L_404".to_string() };

    let err = locator.extract(json!({"node": null})).unwrap_err();

    assert_eq!(err.graphql_kind(), Some(&GraphQLErrorKind::NotFound));
    assert!(err.is_not_found());
}

#[test]
fn missing_root_is_internal() {
    let locator = Locator::Node { id: "L_1".to_string() };

    let err = locator.extract(json!({})).unwrap_err();

    assert_eq!(err.graphql_kind(), Some(&GraphQLErrorKind::Internal));
}

#[test]
fn located_object_is_extracted() {
    let locator = Locator::Resource { url: "https://github.com/octocat".to_string() };

    let payload =
        locator.extract(json!({"resource": {"login": "octocat"}}))
            .unwrap();

    assert_eq!(payload.get("login"), Some(&json!("octocat")));
}
