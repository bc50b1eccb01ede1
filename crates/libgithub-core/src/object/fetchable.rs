use crate::error::ClientError;
use crate::error::GraphQLError;
use crate::fields::selector_key;
use crate::object::FieldError;
use crate::object::Locator;
use crate::object::Object;
use crate::object::Payload;
use crate::transport::Requester;
use serde::de::DeserializeOwned;
use serde_json::Value;

type Result<T> = std::result::Result<T, ClientError>;

/// An [`Object`] that can load the fields its payload lacks.
///
/// Every `fetch_*` accessor of a fetchable type goes through
/// [`Fetchable::fetch_field()`]: a field already in the payload is returned
/// without touching the network, anything else is requested with a
/// single-field query against the object's [`Locator`] and stored in the
/// payload, so the next read is local.
#[allow(async_fn_in_trait)]
pub trait Fetchable: Object {
    /// The payload keys [`Fetchable::locate()`] can locate the object by.
    const IDENTIFYING_KEYS: &'static [&'static str] = &["id"];

    /// How to find this object on the server, or `None` when the payload
    /// carries none of [`Fetchable::IDENTIFYING_KEYS`].
    fn locate(&self) -> Option<Locator> {
        let id = self.payload().get("id")?.as_str()?;
        Some(Locator::Node {
            id: id.to_string(),
        })
    }

    fn requester(&self) -> &Requester;

    /// Read `name` from the payload, fetching it first when it is missing.
    async fn fetch_field<T: DeserializeOwned>(&mut self, name: &str) -> Result<T> {
        match self.field(name) {
            Err(FieldError::Missing(_)) => (),
            loaded => return Ok(loaded?),
        }
        self.refresh(&[name]).await?;
        Ok(self.field(name)?)
    }

    /// Fetch `names` and store them in the payload, overwriting any value
    /// already loaded.
    async fn refresh(&mut self, names: &[&str]) -> Result<()> {
        let declaration = Self::DECLARATION;
        let locator = self.locate().ok_or(ClientError::MissingIdentifier {
            keys: Self::IDENTIFYING_KEYS,
            type_name: declaration.type_name(),
        })?;

        let selectors = declaration.merged_fields(Some(names));
        let (builder, variables) = locator.query(declaration, &selectors)?;
        log::debug!(
            "Fetching {names:?} of a `{}` through `{}`.",
            declaration.type_name(),
            locator.root(),
        );

        let data = self.requester().execute(&builder, variables).await?;
        let mut object = locator.extract(data)?;

        let mut patch = Payload::default();
        for selector in &selectors {
            let key = selector_key(selector);
            let value = object.remove(key).ok_or_else(|| GraphQLError::internal(format!(
                "The response to `{}` lacks the requested `{key}` field of \
                the `{}` object.",
                builder.name().unwrap_or("anonymous"),
                declaration.graphql_type(),
            )))?;
            patch.insert(key, value);
        }
        self.payload_mut().merge(patch);
        Ok(())
    }

    /// Store the fields of a mutation or query response in the payload.
    fn patch(&mut self, fields: Value) -> Result<()> {
        let patch = Payload::from_value(fields)?;
        self.payload_mut().merge(patch);
        Ok(())
    }
}
