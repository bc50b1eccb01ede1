use crate::interfaces::UNIFORM_RESOURCE_LOCATABLE;
use crate::interfaces::UniformResourceLocatable;
use libgithub_core::error::ClientError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::FieldResult;

pub static ACTOR: Declaration = Declaration::new(
    "Actor",
    None,
    &[
        ("avatar_url", "avatarUrl"),
        ("login", "login"),
    ],
    &[&UNIFORM_RESOURCE_LOCATABLE],
);

/// An entity that can take actions on GitHub: a user, a bot or an
/// organization.
#[allow(async_fn_in_trait)]
pub trait Actor: UniformResourceLocatable {
    fn avatar_url(&self) -> FieldResult<String> {
        self.field("avatar_url")
    }

    async fn fetch_avatar_url(&mut self) -> Result<String, ClientError> {
        self.fetch_field("avatar_url").await
    }

    async fn fetch_login(&mut self) -> Result<String, ClientError> {
        self.fetch_field("login").await
    }

    fn login(&self) -> FieldResult<String> {
        self.field("login")
    }
}
