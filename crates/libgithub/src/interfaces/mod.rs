//! GraphQL interfaces shared by several object types.
//!
//! Each interface pairs a static [`Declaration`](crate::fields::Declaration)
//! of the fields it introduces with a trait whose default methods read (or
//! fetch) those fields. A concrete type composes an interface by listing its
//! declaration among its own declaration's bases and implementing the trait.

mod actor;
mod comment;
mod repository_owner;
mod starrable;
mod uniform_resource_locatable;

pub use actor::ACTOR;
pub use actor::Actor;
pub use comment::COMMENT;
pub use comment::Comment;
pub use repository_owner::REPOSITORY_OWNER;
pub use repository_owner::RepositoryOwner;
pub use starrable::STARRABLE;
pub use starrable::Starrable;
pub use uniform_resource_locatable::UNIFORM_RESOURCE_LOCATABLE;
pub use uniform_resource_locatable::UniformResourceLocatable;
