use crate::interfaces::STARRABLE;
use crate::interfaces::Starrable;
use crate::interfaces::UNIFORM_RESOURCE_LOCATABLE;
use crate::interfaces::UniformResourceLocatable;
use crate::objects::License;
use crate::objects::RepositoryOwnerKind;
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
use serde::Deserialize;
use serde_json::Value;

pub static REPOSITORY: Declaration = Declaration::new(
    "Repository",
    None,
    &[
        ("created_at", "createdAt"),
        ("description", "description"),
        ("fork_count", "forkCount"),
        ("homepage_url", "homepageUrl"),
        ("is_archived", "isArchived"),
        ("is_fork", "isFork"),
        ("is_private", "isPrivate"),
        ("license_info", "licenseInfo{__typename,id,key,name,spdxId,url}"),
        ("name", "name"),
        ("name_with_owner", "nameWithOwner"),
        ("owner", "owner{__typename,id,avatarUrl,login,resourcePath,url}"),
        ("primary_language", "primaryLanguage{name}"),
        ("pushed_at", "pushedAt"),
        ("updated_at", "updatedAt"),
    ],
    &[&STARRABLE, &UNIFORM_RESOURCE_LOCATABLE],
);

#[derive(Deserialize)]
struct Language {
    name: String,
}

#[derive(Clone, Debug)]
pub struct Repository {
    payload: Payload,
    requester: Requester,
}
impl Repository {
    pub fn created_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("created_at")
    }

    pub fn description(&self) -> FieldResult<Option<String>> {
        self.field("description")
    }

    pub async fn fetch_description(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("description").await
    }

    pub async fn fetch_license_info(&mut self) -> Result<Option<License>, ClientError> {
        let license: Option<Value> = self.fetch_field("license_info").await?;
        license.map(|license| License::from_value(license, &self.requester))
            .transpose()
    }

    pub async fn fetch_name(&mut self) -> Result<String, ClientError> {
        self.fetch_field("name").await
    }

    pub async fn fetch_owner(&mut self) -> Result<RepositoryOwnerKind, ClientError> {
        let owner: Value = self.fetch_field("owner").await?;
        RepositoryOwnerKind::from_value(owner, &self.requester)
    }

    pub fn fork_count(&self) -> FieldResult<u64> {
        self.field("fork_count")
    }

    pub fn homepage_url(&self) -> FieldResult<Option<String>> {
        self.field("homepage_url")
    }

    pub fn is_archived(&self) -> FieldResult<bool> {
        self.field("is_archived")
    }

    pub fn is_fork(&self) -> FieldResult<bool> {
        self.field("is_fork")
    }

    pub fn is_private(&self) -> FieldResult<bool> {
        self.field("is_private")
    }

    /// The license detected in the repository, if any.
    pub fn license_info(&self) -> Result<Option<License>, ClientError> {
        let license: Option<Value> = self.field("license_info")?;
        license.map(|license| License::from_value(license, &self.requester))
            .transpose()
    }

    pub fn name(&self) -> FieldResult<String> {
        self.field("name")
    }

    /// `owner/name`
    pub fn name_with_owner(&self) -> FieldResult<String> {
        self.field("name_with_owner")
    }

    pub fn owner(&self) -> Result<RepositoryOwnerKind, ClientError> {
        let owner: Value = self.field("owner")?;
        RepositoryOwnerKind::from_value(owner, &self.requester)
    }

    pub fn primary_language(&self) -> FieldResult<Option<String>> {
        let language: Option<Language> = self.field("primary_language")?;
        Ok(language.map(|language| language.name))
    }

    pub fn pushed_at(&self) -> FieldResult<Option<DateTime<Utc>>> {
        self.field("pushed_at")
    }

    pub fn updated_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("updated_at")
    }
}
impl Fetchable for Repository {
    const IDENTIFYING_KEYS: &'static [&'static str] = &["id", "url"];

    fn locate(&self) -> Option<Locator> {
        locate::by_id(&self.payload).or_else(|| locate::by_url(&self.payload))
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
impl FromPayload for Repository {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        check_typename(&payload, &REPOSITORY)?;
        Ok(Self {
            payload,
            requester: requester.to_owned(),
        })
    }
}
impl Node for Repository {}
impl Object for Repository {
    const DECLARATION: &'static Declaration = &REPOSITORY;

    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }
}
impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}
impl Starrable for Repository {}
impl UniformResourceLocatable for Repository {}
