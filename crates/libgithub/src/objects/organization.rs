use crate::interfaces::ACTOR;
use crate::interfaces::Actor;
use crate::interfaces::REPOSITORY_OWNER;
use crate::interfaces::RepositoryOwner;
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
use libgithub_core::object::Node;
use libgithub_core::object::Object;
use libgithub_core::object::Payload;
use libgithub_core::object::check_typename;
use libgithub_core::object::node_eq;
use libgithub_core::transport::Requester;

pub static ORGANIZATION: Declaration = Declaration::new(
    "Organization",
    None,
    &[
        ("created_at", "createdAt"),
        ("description", "description"),
        ("email", "email"),
        ("is_verified", "isVerified"),
        ("location", "location"),
        ("name", "name"),
        ("website_url", "websiteUrl"),
    ],
    &[&ACTOR, &REPOSITORY_OWNER],
);

#[derive(Clone, Debug)]
pub struct Organization {
    payload: Payload,
    requester: Requester,
}
impl Organization {
    pub fn created_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("created_at")
    }

    pub fn description(&self) -> FieldResult<Option<String>> {
        self.field("description")
    }

    /// The public email of the organization.
    pub fn email(&self) -> FieldResult<Option<String>> {
        self.field("email")
    }

    pub async fn fetch_description(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("description").await
    }

    pub async fn fetch_name(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("name").await
    }

    /// Whether the organization verified its domain.
    pub fn is_verified(&self) -> FieldResult<bool> {
        self.field("is_verified")
    }

    pub fn location(&self) -> FieldResult<Option<String>> {
        self.field("location")
    }

    pub fn name(&self) -> FieldResult<Option<String>> {
        self.field("name")
    }

    pub fn website_url(&self) -> FieldResult<Option<String>> {
        self.field("website_url")
    }
}
impl Actor for Organization {}
impl Fetchable for Organization {
    const IDENTIFYING_KEYS: &'static [&'static str] = &["id", "login"];

    fn locate(&self) -> Option<Locator> {
        locate::by_id(&self.payload)
            .or_else(|| locate::by_key(&self.payload, "organization", "login"))
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
impl FromPayload for Organization {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        check_typename(&payload, &ORGANIZATION)?;
        Ok(Self {
            payload,
            requester: requester.to_owned(),
        })
    }
}
impl Node for Organization {}
impl Object for Organization {
    const DECLARATION: &'static Declaration = &ORGANIZATION;

    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }
}
impl PartialEq for Organization {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}
impl RepositoryOwner for Organization {}
impl UniformResourceLocatable for Organization {}
