use crate::objects::ActorKind;
use chrono::DateTime;
use chrono::Utc;
use libgithub_core::error::ClientError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::Fetchable;
use libgithub_core::object::FieldResult;
use libgithub_core::object::FromPayload;
use libgithub_core::object::NODE;
use libgithub_core::object::Node;
use serde_json::Value;

pub static COMMENT: Declaration = Declaration::new(
    "Comment",
    None,
    &[
        (
            "author",
            "author{__typename,avatarUrl,login,resourcePath,url,... on Node{id},... on User{isViewer}}",
        ),
        ("body", "body"),
        ("created_at", "createdAt"),
        ("updated_at", "updatedAt"),
        ("viewer_did_author", "viewerDidAuthor"),
    ],
    &[&NODE],
);

#[allow(async_fn_in_trait)]
pub trait Comment: Node + Fetchable {
    /// The actor who wrote the comment; `None` for deleted accounts.
    fn author(&self) -> Result<Option<ActorKind>, ClientError> {
        let author: Option<Value> = self.field("author")?;
        author.map(|author| ActorKind::from_value(author, self.requester()))
            .transpose()
    }

    fn body(&self) -> FieldResult<String> {
        self.field("body")
    }

    fn created_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("created_at")
    }

    async fn fetch_author(&mut self) -> Result<Option<ActorKind>, ClientError> {
        let author: Option<Value> = self.fetch_field("author").await?;
        author.map(|author| ActorKind::from_value(author, self.requester()))
            .transpose()
    }

    async fn fetch_body(&mut self) -> Result<String, ClientError> {
        self.fetch_field("body").await
    }

    async fn fetch_created_at(&mut self) -> Result<DateTime<Utc>, ClientError> {
        self.fetch_field("created_at").await
    }

    async fn fetch_updated_at(&mut self) -> Result<DateTime<Utc>, ClientError> {
        self.fetch_field("updated_at").await
    }

    fn updated_at(&self) -> FieldResult<DateTime<Utc>> {
        self.field("updated_at")
    }

    fn viewer_did_author(&self) -> FieldResult<bool> {
        self.field("viewer_did_author")
    }
}
