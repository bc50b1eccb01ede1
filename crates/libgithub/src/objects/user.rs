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

pub static USER: Declaration = Declaration::new(
    "User",
    None,
    &[
        ("bio", "bio"),
        ("company", "company"),
        ("created_at", "createdAt"),
        ("is_viewer", "isViewer"),
        ("location", "location"),
        ("name", "name"),
        ("twitter_username", "twitterUsername"),
        ("website_url", "websiteUrl"),
    ],
    &[&ACTOR, &REPOSITORY_OWNER],
);

/// A GitHub user account.
#[derive(Clone, Debug)]
pub struct User {
    payload: Payload,
    requester: Requester,
}
impl User {
    pub fn bio(&self) -> FieldResult<Option<String>> {
        self.field("bio")
    }

    pub fn company(&self) -> FieldResult<Option<String>> {
        self.field("company")
    }

    pub fn created_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("created_at")
    }

    pub async fn fetch_bio(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("bio").await
    }

    pub async fn fetch_company(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("company").await
    }

    pub async fn fetch_created_at(&mut self) -> Result<DateTime<Utc>, ClientError> {
        self.fetch_field("created_at").await
    }

    pub async fn fetch_location(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("location").await
    }

    pub async fn fetch_name(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("name").await
    }

    /// Whether this is the user the client is authenticated as.
    pub fn is_viewer(&self) -> FieldResult<bool> {
        self.field("is_viewer")
    }

    pub fn location(&self) -> FieldResult<Option<String>> {
        self.field("location")
    }

    pub fn name(&self) -> FieldResult<Option<String>> {
        self.field("name")
    }

    pub fn twitter_username(&self) -> FieldResult<Option<String>> {
        self.field("twitter_username")
    }

    pub fn website_url(&self) -> FieldResult<Option<String>> {
        self.field("website_url")
    }
}
impl Actor for User {}
impl Fetchable for User {
    const IDENTIFYING_KEYS: &'static [&'static str] = &["id", "login"];

    fn locate(&self) -> Option<Locator> {
        locate::by_id(&self.payload)
            .or_else(|| locate::by_key(&self.payload, "user", "login"))
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
impl FromPayload for User {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        check_typename(&payload, &USER)?;
        Ok(Self {
            payload,
            requester: requester.to_owned(),
        })
    }
}
impl Node for User {}
impl Object for User {
    const DECLARATION: &'static Declaration = &USER;

    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }
}
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}
impl RepositoryOwner for User {}
impl UniformResourceLocatable for User {}
