use libgithub_core::object::Locator;
use libgithub_core::object::Payload;

pub(super) fn by_id(payload: &Payload) -> Option<Locator> {
    let id = payload.get("id")?.as_str()?;
    Some(Locator::Node {
        id: id.to_string(),
    })
}

/// Through a root field taking a single `String!` argument read from the
/// payload key of the same name.
pub(super) fn by_key(
    payload: &Payload,
    root: &'static str,
    argument: &'static str,
) -> Option<Locator> {
    let value = payload.get(argument)?.as_str()?;
    Some(Locator::Keyed {
        argument,
        argument_type: "String!",
        root,
        value: value.to_string(),
    })
}

pub(super) fn by_url(payload: &Payload) -> Option<Locator> {
    let url = payload.get("url")?.as_str()?;
    Some(Locator::Resource {
        url: url.to_string(),
    })
}
