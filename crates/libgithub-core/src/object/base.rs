use crate::fields::Declaration;
use crate::object::FieldResult;
use crate::object::Object;

/// Fields every GraphQL object carries.
pub static TYPE: Declaration = Declaration::new(
    "Type",
    None,
    &[("typename", "__typename")],
    &[],
);

/// Fields of the `Node` interface: objects with a global ID.
pub static NODE: Declaration = Declaration::new(
    "Node",
    None,
    &[("id", "id")],
    &[&TYPE],
);

pub trait Node: Object {
    fn id(&self) -> FieldResult<String> {
        self.field("id")
    }
}

/// Node identity: two objects are equal when their `id`s are. Objects whose
/// ids were not both loaded compare by payload.
pub fn node_eq<A: Object, B: Object>(a: &A, b: &B) -> bool {
    match (a.payload().get("id"), b.payload().get("id")) {
        (Some(a_id), Some(b_id)) => a_id == b_id,
        _ => a.payload() == b.payload(),
    }
}
