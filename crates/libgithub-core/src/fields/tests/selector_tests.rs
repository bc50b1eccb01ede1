use crate::fields::selector_key;

#[test]
fn bare_selector_is_its_own_key() {
    assert_eq!(selector_key("spdxId"), "spdxId");
    assert_eq!(selector_key("__typename"), "__typename");
}

#[test]
fn sub_selection_is_stripped() {
    assert_eq!(selector_key("conditions{description,key,label}"), "conditions");
    assert_eq!(selector_key("owner {login}"), "owner");
}

#[test]
fn arguments_are_stripped_even_when_they_contain_colons() {
    assert_eq!(
        selector_key("repositories(first: 10, after: null){totalCount}"),
        "repositories",
    );
}

#[test]
fn alias_becomes_the_key() {
    assert_eq!(selector_key("fullName: nameWithOwner"), "fullName");
    assert_eq!(selector_key("owner: repositoryOwner(login: $login){id}"), "owner");
}
