use crate::objects::AuthenticatedUser;
use crate::objects::User;
use libgithub_core::error::ClientError;
use libgithub_core::object::FromPayload;
use libgithub_core::object::Payload;
use libgithub_core::transport::Requester;
use serde_json::Value;

/// A user payload, promoted to [`AuthenticatedUser`] when it reports
/// `isViewer: true`.
#[derive(Clone, Debug, PartialEq)]
pub enum UserAccount {
    Authenticated(AuthenticatedUser),
    User(User),
}
impl UserAccount {
    pub fn as_user(&self) -> &User {
        match self {
            Self::Authenticated(user) => user,
            Self::User(user) => user,
        }
    }

    pub fn into_user(self) -> User {
        match self {
            Self::Authenticated(user) => user.into_user(),
            Self::User(user) => user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
impl FromPayload for UserAccount {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        let is_viewer = matches!(payload.get("isViewer"), Some(Value::Bool(true)));
        let user = User::from_payload(payload, requester)?;
        Ok(match is_viewer {
            true => Self::Authenticated(AuthenticatedUser::from(user)),
            false => Self::User(user),
        })
    }
}
