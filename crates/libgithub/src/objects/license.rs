use crate::objects::LicenseRule;
use crate::objects::locate;
use libgithub_core::error::ClientError;
use libgithub_core::fields::Declaration;
use libgithub_core::fields::TYPENAME;
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
use serde_json::Value;

pub static LICENSE: Declaration = Declaration::new(
    "License",
    None,
    &[
        ("body", "body"),
        ("conditions", "conditions{description,key,label}"),
        ("description", "description"),
        ("featured", "featured"),
        ("hidden", "hidden"),
        ("implementation", "implementation"),
        ("key", "key"),
        ("limitations", "limitations{description,key,label}"),
        ("name", "name"),
        ("nickname", "nickname"),
        ("permissions", "permissions{description,key,label}"),
        ("pseudo_license", "pseudoLicense"),
        ("spdx_id", "spdxId"),
        ("url", "url"),
    ],
    &[&NODE],
);

/// An open source license, as listed on choosealicense.com.
#[derive(Clone, Debug)]
pub struct License {
    payload: Payload,
    requester: Requester,
}
impl License {
    pub fn body(&self) -> FieldResult<String> {
        self.field("body")
    }

    pub fn conditions(&self) -> FieldResult<Vec<LicenseRule>> {
        self.rules("conditions")
    }

    pub fn description(&self) -> FieldResult<Option<String>> {
        self.field("description")
    }

    pub async fn fetch_body(&mut self) -> Result<String, ClientError> {
        self.fetch_field("body").await
    }

    pub async fn fetch_conditions(&mut self) -> Result<Vec<LicenseRule>, ClientError> {
        self.fetch_rules("conditions").await
    }

    pub async fn fetch_description(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("description").await
    }

    pub async fn fetch_limitations(&mut self) -> Result<Vec<LicenseRule>, ClientError> {
        self.fetch_rules("limitations").await
    }

    pub async fn fetch_name(&mut self) -> Result<String, ClientError> {
        self.fetch_field("name").await
    }

    pub async fn fetch_permissions(&mut self) -> Result<Vec<LicenseRule>, ClientError> {
        self.fetch_rules("permissions").await
    }

    pub async fn fetch_spdx_id(&mut self) -> Result<Option<String>, ClientError> {
        self.fetch_field("spdx_id").await
    }

    /// Whether the license is featured on choosealicense.com.
    pub fn featured(&self) -> FieldResult<bool> {
        self.field("featured")
    }

    /// A license known only by its key, to be filled in lazily by the
    /// `fetch_*` methods through the `license(key:)` root.
    pub fn from_key(key: impl Into<String>, requester: &Requester) -> Self {
        let mut payload = Payload::default();
        payload.insert("key", Value::String(key.into()));
        payload.insert(TYPENAME, Value::String(LICENSE.graphql_type().to_string()));
        Self {
            payload,
            requester: requester.to_owned(),
        }
    }

    pub fn hidden(&self) -> FieldResult<bool> {
        self.field("hidden")
    }

    pub fn implementation(&self) -> FieldResult<Option<String>> {
        self.field("implementation")
    }

    /// The lowercased SPDX ID of the license, e.g. `mit`.
    pub fn key(&self) -> FieldResult<String> {
        self.field("key")
    }

    pub fn limitations(&self) -> FieldResult<Vec<LicenseRule>> {
        self.rules("limitations")
    }

    pub fn name(&self) -> FieldResult<String> {
        self.field("name")
    }

    pub fn nickname(&self) -> FieldResult<Option<String>> {
        self.field("nickname")
    }

    pub fn permissions(&self) -> FieldResult<Vec<LicenseRule>> {
        self.rules("permissions")
    }

    /// Whether the "license" is a placeholder such as `other`.
    pub fn pseudo_license(&self) -> FieldResult<bool> {
        self.field("pseudo_license")
    }

    pub fn spdx_id(&self) -> FieldResult<Option<String>> {
        self.field("spdx_id")
    }

    pub fn url(&self) -> FieldResult<Option<String>> {
        self.field("url")
    }

    async fn fetch_rules(&mut self, name: &str) -> Result<Vec<LicenseRule>, ClientError> {
        let rules: Vec<Payload> = self.fetch_field(name).await?;
        Ok(rules.into_iter().map(LicenseRule::from).collect())
    }

    fn rules(&self, name: &str) -> FieldResult<Vec<LicenseRule>> {
        let rules: Vec<Payload> = self.field(name)?;
        Ok(rules.into_iter().map(LicenseRule::from).collect())
    }
}
impl Fetchable for License {
    const IDENTIFYING_KEYS: &'static [&'static str] = &["id", "key"];

    /// By `id` when it is loaded, otherwise through `license(key:)`.
    fn locate(&self) -> Option<Locator> {
        locate::by_id(&self.payload)
            .or_else(|| locate::by_key(&self.payload, "license", "key"))
    }

    fn requester(&self) -> &Requester {
        &self.requester
    }
}
impl FromPayload for License {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        check_typename(&payload, &LICENSE)?;
        Ok(Self {
            payload,
            requester: requester.to_owned(),
        })
    }
}
impl Node for License {}
impl Object for License {
    const DECLARATION: &'static Declaration = &LICENSE;

    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }
}
impl PartialEq for License {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}
