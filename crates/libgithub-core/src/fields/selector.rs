/// The discriminator every polymorphic selection must carry.
pub const TYPENAME: &str = "__typename";

/// The key a selector produces in a response object.
///
/// ```
/// use libgithub_core::fields::selector_key;
///
/// assert_eq!(selector_key("createdAt"), "createdAt");
/// assert_eq!(selector_key("conditions{description,key,label}"), "conditions");
/// assert_eq!(selector_key("repositories(first: 10){totalCount}"), "repositories");
/// assert_eq!(selector_key("owner: repositoryOwner{login}"), "owner");
/// ```
pub fn selector_key(selector: &str) -> &str {
    let head_end =
        selector.find(|c: char| c == '(' || c == '{')
            .unwrap_or(selector.len());
    let head = &selector[..head_end];
    match head.split_once(':') {
        Some((alias, _field_name)) => alias.trim(),
        None => head.trim(),
    }
}
