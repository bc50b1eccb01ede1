use crate::interfaces::Actor;
use crate::objects::Organization;
use crate::objects::User;
use libgithub_core::error::ClientError;
use libgithub_core::object::FieldResult;
use libgithub_core::object::FromPayload;
use libgithub_core::object::Payload;
use libgithub_core::transport::Requester;

/// Any object implementing the `RepositoryOwner` interface.
#[derive(Clone, Debug, PartialEq)]
pub enum RepositoryOwnerKind {
    Organization(Organization),
    User(User),
}
impl RepositoryOwnerKind {
    pub fn login(&self) -> FieldResult<String> {
        match self {
            Self::Organization(org) => org.login(),
            Self::User(user) => user.login(),
        }
    }
}
impl FromPayload for RepositoryOwnerKind {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        let typename = payload.require_typename()?.to_string();
        match typename.as_str() {
            "Organization" => Ok(Self::Organization(
                Organization::from_payload(payload, requester)?,
            )),
            "User" => Ok(Self::User(User::from_payload(payload, requester)?)),
            _ => Err(ClientError::UnexpectedTypename {
                expected: "RepositoryOwner",
                typename,
            }),
        }
    }
}
