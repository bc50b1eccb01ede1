use crate::interfaces::ACTOR;
use crate::interfaces::Actor;
use crate::interfaces::UniformResourceLocatable;
use crate::objects::locate;
use chrono::DateTime;
use chrono::Utc;
use libgithub_core::error::ClientError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::Fetchable;
use libgithub_core::object::FieldResult;
use libgithub_core::object::FromPayload;
use libgithub_core::object::Locator;
use libgithub_core::object::NODE;
use libgithub_core::object::Node;
use libgithub_core::object::Object;
use libgithub_core::object::Payload;
use libgithub_core::object::check_typename;
use libgithub_core::object::node_eq;
use libgithub_core::transport::Requester;

pub static BOT: Declaration = Declaration::new(
    "Bot",
    None,
    &[
        ("created_at", "createdAt"),
        ("updated_at", "updatedAt"),
    ],
    &[&ACTOR, &NODE],
);

/// A GitHub App acting on its own behalf.
#[derive(Clone, Debug)]
pub struct Bot {
    payload: Payload,
    requester: Requester,
}
impl Bot {
    pub fn created_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("created_at")
    }

    pub fn updated_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("updated_at")
    }
}
impl Actor for Bot {}
impl Fetchable for Bot {
    const IDENTIFYING_KEYS: &'static [&'static str] = &["id", "url"];

    fn locate(&self) -> Option<Locator> {
        locate::by_id(&self.payload).or_else(|| locate::by_url(&self.payload))
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
impl FromPayload for Bot {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        check_typename(&payload, &BOT)?;
        Ok(Self {
            payload,
            requester: requester.to_owned(),
        })
    }
}
impl Node for Bot {}
impl Object for Bot {
    const DECLARATION: &'static Declaration = &BOT;

    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }
}
impl PartialEq for Bot {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}
impl UniformResourceLocatable for Bot {}
