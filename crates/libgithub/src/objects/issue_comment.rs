use crate::interfaces::COMMENT;
use crate::interfaces::Comment;
use crate::interfaces::UNIFORM_RESOURCE_LOCATABLE;
use crate::interfaces::UniformResourceLocatable;
use crate::objects::locate;
use libgithub_core::error::ClientError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::Fetchable;
use libgithub_core::object::FieldResult;
use libgithub_core::object::FromPayload;
use libgithub_core::object::Locator;
use libgithub_core::object::Node;
use libgithub_core::object::Object;
use libgithub_core::object::Payload;
use libgithub_core::object::check_typename;
use libgithub_core::object::node_eq;
use libgithub_core::transport::Requester;

pub static ISSUE_COMMENT: Declaration = Declaration::new(
    "IssueComment",
    None,
    &[
        ("is_minimized", "isMinimized"),
        ("minimized_reason", "minimizedReason"),
    ],
    &[&COMMENT, &UNIFORM_RESOURCE_LOCATABLE],
);

/// A comment on an issue or pull request.
#[derive(Clone, Debug)]
pub struct IssueComment {
    payload: Payload,
    requester: Requester,
}
impl IssueComment {
    /// Whether the comment was hidden, e.g. as spam or off-topic.
    pub fn is_minimized(&self) -> FieldResult<bool> {
        self.field("is_minimized")
    }

    pub fn minimized_reason(&self) -> FieldResult<Option<String>> {
        self.field("minimized_reason")
    }
}
impl Comment for IssueComment {}
impl Fetchable for IssueComment {
    const IDENTIFYING_KEYS: &'static [&'static str] = &["id", "url"];

    fn locate(&self) -> Option<Locator> {
        locate::by_id(&self.payload).or_else(|| locate::by_url(&self.payload))
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
impl FromPayload for IssueComment {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        check_typename(&payload, &ISSUE_COMMENT)?;
        Ok(Self {
            payload,
            requester: requester.to_owned(),
        })
    }
}
impl Node for IssueComment {}
impl Object for IssueComment {
    const DECLARATION: &'static Declaration = &ISSUE_COMMENT;

    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }
}
impl PartialEq for IssueComment {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}
impl UniformResourceLocatable for IssueComment {}
