use crate::interfaces::Actor;
use crate::objects::AuthenticatedUser;
use crate::objects::Bot;
use crate::objects::Organization;
use crate::objects::User;
use crate::objects::UserAccount;
use libgithub_core::error::ClientError;
use libgithub_core::object::FieldError;
use libgithub_core::object::FieldResult;
use libgithub_core::object::FromPayload;
use libgithub_core::object::MissingField;
use libgithub_core::object::Payload;
use libgithub_core::transport::Requester;
use serde::de::DeserializeOwned;

/// Any object implementing the `Actor` interface.
///
/// Actors without a typed counterpart in this crate, such as `Mannequin` or
/// `EnterpriseUserAccount`, keep their raw payload in [`ActorKind::Other`].
#[derive(Clone, Debug, PartialEq)]
pub enum ActorKind {
    AuthenticatedUser(AuthenticatedUser),
    Bot(Bot),
    Organization(Organization),
    Other(Payload),
    User(User),
}
impl ActorKind {
    pub fn avatar_url(&self) -> FieldResult<String> {
        match self {
            Self::AuthenticatedUser(user) => user.avatar_url(),
            Self::Bot(bot) => bot.avatar_url(),
            Self::Organization(org) => org.avatar_url(),
            Self::Other(payload) => raw_field(payload, "avatar_url", "avatarUrl"),
            Self::User(user) => user.avatar_url(),
        }
    }

    pub fn login(&self) -> FieldResult<String> {
        match self {
            Self::AuthenticatedUser(user) => user.login(),
            Self::Bot(bot) => bot.login(),
            Self::Organization(org) => org.login(),
            Self::Other(payload) => raw_field(payload, "login", "login"),
            Self::User(user) => user.login(),
        }
    }
}
impl FromPayload for ActorKind {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        let typename = payload.require_typename()?.to_string();
        match typename.as_str() {
            "Bot" => Ok(Self::Bot(Bot::from_payload(payload, requester)?)),
            "Organization" => Ok(Self::Organization(
                Organization::from_payload(payload, requester)?,
            )),
            "User" => Ok(match UserAccount::from_payload(payload, requester)? {
                UserAccount::Authenticated(user) => Self::AuthenticatedUser(user),
                UserAccount::User(user) => Self::User(user),
            }),
            _ => {
                log::debug!("Keeping a `{typename}` actor as a raw payload.");
                Ok(Self::Other(payload))
            },
        }
    }
}

fn raw_field<T: DeserializeOwned>(
    payload: &Payload,
    field: &str,
    key: &str,
) -> FieldResult<T> {
    let value = payload.get(key).ok_or_else(|| MissingField {
        field: field.to_string(),
        type_name: "Actor",
    })?;
    T::deserialize(value).map_err(|err| FieldError::Malformed {
        field: field.to_string(),
        message: err.to_string(),
        type_name: "Actor",
    })
}
