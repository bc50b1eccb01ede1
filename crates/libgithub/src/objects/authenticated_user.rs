use crate::objects::User;
use libgithub_core::error::ClientError;
use libgithub_core::object::FromPayload;
use libgithub_core::object::Payload;
use libgithub_core::transport::Requester;
use std::ops::Deref;
use std::ops::DerefMut;

/// The [`User`] the client is authenticated as.
///
/// Materialized from the `viewer` root, or from any `User` payload whose
/// `isViewer` is `true`. Everything a [`User`] offers is reachable through
/// `Deref`.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser(User);
impl AuthenticatedUser {
    pub fn into_user(self) -> User {
        self.0
    }
}
impl Deref for AuthenticatedUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}
impl DerefMut for AuthenticatedUser {
    fn deref_mut(&mut self) -> &mut User {
        &mut self.0
    }
}
impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self(user)
    }
}
impl FromPayload for AuthenticatedUser {
    fn from_payload(payload: Payload, requester: &Requester) -> Result<Self, ClientError> {
        Ok(Self(User::from_payload(payload, requester)?))
    }
}
