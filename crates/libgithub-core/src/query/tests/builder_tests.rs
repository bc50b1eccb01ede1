use crate::query::query_node::QueryNode;
use crate::query::Builder;
use crate::query::Collection;
use crate::query::CollectionArgument;
use crate::query::Field;
use crate::query::Fragment;
use crate::query::OperationKind;
use crate::query::QueryArgument;
use crate::query::QueryBuildError;
use crate::test_utils::assert_valid_graphql;

#[test]
fn empty_builder_fails_to_build() {
    let result = Builder::query().named("Empty").build();

    assert_eq!(result, Err(QueryBuildError::EmptyDocument {
        document_name: Some("Empty".to_string()),
    }));
}

#[test]
fn builder_with_only_fragment_definitions_is_empty() {
    let builder =
        Builder::query()
            .add_fragment(
                Fragment::new("LicenseParts", "License")
                    .add_field(Field::new("key")).unwrap()
            ).unwrap();

    assert!(builder.is_empty());
    assert!(matches!(
        builder.build(),
        Err(QueryBuildError::EmptyDocument { document_name: None }),
    ));
}

#[test]
fn single_field_makes_builder_buildable() {
    let document =
        Builder::query()
            .add_field(Field::new("__typename")).unwrap()
            .build()
            .unwrap();

    assert_eq!(document, "query {\n  __typename\n}");
    assert_valid_graphql(&document);
}

#[test]
fn arguments_render_as_variable_declarations() {
    let document =
        Builder::query()
            .named("FetchRepositories")
            .add_argument(QueryArgument::new("login", "String!")).unwrap()
            .add_argument(
                QueryArgument::new("first", "Int").with_default("30"),
            ).unwrap()
            .add_collection(
                Collection::new("repositoryOwner")
                    .add_argument(CollectionArgument::variable("login", "login")).unwrap()
                    .add_collection(
                        Collection::new("repositories")
                            .add_argument(CollectionArgument::variable("first", "first")).unwrap()
                            .add_field(Field::new("totalCount")).unwrap()
                    ).unwrap()
            ).unwrap()
            .build()
            .unwrap();

    assert_eq!(document, "\
query FetchRepositories ($login: String!, $first: Int = 30) {
  repositoryOwner(login: $login) {
    repositories(first: $first) {
      totalCount
    }
  }
}");
    assert_valid_graphql(&document);
}

#[test]
fn collections_render_before_fields() {
    let document =
        Builder::query()
            .add_field(Field::new("__typename")).unwrap()
            .add_collection(
                Collection::new("viewer")
                    .add_field(Field::new("login")).unwrap()
            ).unwrap()
            .build()
            .unwrap();

    assert_eq!(document, "\
query {
  viewer {
    login
  }
  __typename
}");
}

#[test]
fn mutation_documents_use_the_mutation_keyword() {
    let builder =
        Builder::mutation()
            .named("AddStar")
            .add_argument(QueryArgument::new("starrableId", "ID!")).unwrap()
            .add_collection(
                Collection::new("addStar")
                    .add_argument(CollectionArgument::new(
                        "input",
                        "{starrableId: $starrableId}",
                    )).unwrap()
                    .add_collection(
                        Collection::new("starrable")
                            .add_field(Field::new("viewerHasStarred")).unwrap()
                    ).unwrap()
            ).unwrap();

    assert_eq!(builder.operation_kind(), OperationKind::Mutation);
    let document = builder.build().unwrap();
    assert!(document.starts_with("mutation AddStar ($starrableId: ID!) {\n"));
    assert_valid_graphql(&document);
}

#[test]
fn duplicate_document_arguments_are_rejected() {
    let result =
        Builder::query()
            .named("Dup")
            .add_argument(QueryArgument::new("id", "ID!")).unwrap()
            .add_argument(QueryArgument::new("id", "ID"));

    assert_eq!(result, Err(QueryBuildError::DuplicateArgument {
        argument_name: "id".to_string(),
        parent_name: "Dup".to_string(),
    }));
}

#[test]
fn inline_fragments_are_rejected_at_the_document_root() {
    let result =
        Builder::query()
            .add_fragment(
                Fragment::inline("License")
                    .add_field(Field::new("key")).unwrap()
            );

    assert_eq!(result, Err(QueryBuildError::InlineFragmentAtDocumentRoot {
        type_condition: "License".to_string(),
    }));
}

#[test]
fn spread_fragments_are_defined_once_after_the_operation() {
    let owner_parts =
        Fragment::new("OwnerParts", "RepositoryOwner")
            .add_field(Field::new("login")).unwrap();

    let document =
        Builder::query()
            .add_collection(
                Collection::new("viewer")
                    .add_fragment(owner_parts.copy()).unwrap()
            ).unwrap()
            .add_collection(
                Collection::new("organization")
                    .add_argument(CollectionArgument::string("login", "rust-lang")).unwrap()
                    .add_fragment(owner_parts.copy()).unwrap()
            ).unwrap()
            .build()
            .unwrap();

    assert_eq!(document, "\
query {
  viewer {
    ... OwnerParts
  }
  organization(login: \"rust-lang\") {
    ... OwnerParts
  }
}

fragment OwnerParts on RepositoryOwner {
  login
}");
    assert_valid_graphql(&document);
}

#[test]
fn explicit_fragment_definitions_precede_discovered_ones() {
    let license_parts =
        Fragment::new("LicenseParts", "License")
            .add_field(Field::new("key")).unwrap();
    let rule_parts =
        Fragment::new("RuleParts", "LicenseRule")
            .add_field(Field::new("label")).unwrap();

    let builder =
        Builder::query()
            .add_collection(
                Collection::new("licenses")
                    .add_fragment(license_parts.copy()).unwrap()
                    .add_collection(
                        Collection::new("conditions")
                            .add_fragment(rule_parts.copy()).unwrap()
                    ).unwrap()
            ).unwrap()
            .add_fragment(rule_parts).unwrap();

    let names =
        builder.fragment_definitions()
            .into_iter()
            .map(Fragment::name)
            .collect::<Vec<_>>();
    assert_eq!(names, vec!["RuleParts", "LicenseParts"]);

    let document = builder.build().unwrap();
    assert_eq!(document.matches("fragment RuleParts on LicenseRule").count(), 1);
    assert_valid_graphql(&document);
}

#[test]
fn aliased_fields_render_with_their_alias() {
    let document =
        Builder::query()
            .add_collection(
                Collection::new("repository")
                    .with_alias("repo")
                    .add_field(Field::new("nameWithOwner").with_alias("fullName")).unwrap()
            ).unwrap()
            .build()
            .unwrap();

    assert_eq!(document, "\
query {
  repo: repository {
    fullName: nameWithOwner
  }
}");
}
