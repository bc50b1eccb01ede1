use libgithub_core::error::ClientError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::FieldResult;
use libgithub_core::object::FromPayload;
use libgithub_core::object::Object;
use libgithub_core::object::Payload;
use libgithub_core::object::TYPE;
use libgithub_core::transport::Requester;

pub static LICENSE_RULE: Declaration = Declaration::new(
    "LicenseRule",
    None,
    &[
        ("description", "description"),
        ("key", "key"),
        ("label", "label"),
    ],
    &[&TYPE],
);

/// A permission, condition or limitation of a [`License`](crate::objects::License).
///
/// Rules are always embedded in their license and cannot be fetched on their
/// own.
#[derive(Clone, Debug, PartialEq)]
pub struct LicenseRule {
    payload: Payload,
}
impl LicenseRule {
    pub fn description(&self) -> FieldResult<String> {
        self.field("description")
    }

    pub fn key(&self) -> FieldResult<String> {
        self.field("key")
    }

    pub fn label(&self) -> FieldResult<String> {
        self.field("label")
    }
}
impl From<Payload> for LicenseRule {
    fn from(payload: Payload) -> Self {
        Self { payload }
    }
}
impl FromPayload for LicenseRule {
    fn from_payload(payload: Payload, _requester: &Requester) -> Result<Self, ClientError> {
        Ok(Self::from(payload))
    }
}
impl Object for LicenseRule {
    const DECLARATION: &'static Declaration = &LICENSE_RULE;

    fn payload(&self) -> &Payload {
        &self.payload
    }

    fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }
}
