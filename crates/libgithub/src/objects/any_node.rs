use crate::objects::Bot;
use crate::objects::IssueComment;
use crate::objects::License;
use crate::objects::Organization;
use crate::objects::Repository;
use crate::objects::User;
use libgithub_core::error::ClientError;
use libgithub_core::object::FromPayload;
use libgithub_core::object::Object;
use libgithub_core::object::Payload;
use libgithub_core::transport::Requester;

/// An object reached through the `node`/`nodes` roots.
///
/// Node types without a typed counterpart in this crate keep their raw
/// payload (`id` and `__typename`) in [`AnyNode::Other`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnyNode {
    Bot(Bot),
    IssueComment(IssueComment),
    License(License),
    Organization(Organization),
    Other(Payload),
    Repository(Repository),
    User(User),
}
impl AnyNode {
    pub fn typename(&self) -> Option<&str> {
        match self {
            Self::Bot(node) => node.typename(),
            Self::IssueComment(node) => node.typename(),
            Self::License(node) => node.typename(),
            Self::Organization(node) => node.typename(),
            Self::Other(payload) => payload.typename(),
            Self::Repository(node) => node.typename(),
            Self::User(node) => node.typename(),
        }
    }
}
impl FromPayload for AnyNode {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        let typename = payload.require_typename()?.to_string();
        Ok(match typename.as_str() {
            "Bot" => Self::Bot(Bot::from_payload(payload, requester)?),
            "IssueComment" => Self::IssueComment(IssueComment::from_payload(payload, requester)?),
            "License" => Self::License(License::from_payload(payload, requester)?),
            "Organization" => Self::Organization(Organization::from_payload(payload, requester)?),
            "Repository" => Self::Repository(Repository::from_payload(payload, requester)?),
            "User" => Self::User(User::from_payload(payload, requester)?),
            _ => {
                log::debug!("Keeping a `{typename}` node as a raw payload.");
                Self::Other(payload)
            },
        })
    }
}
