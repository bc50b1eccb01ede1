use libgithub_core::error::ClientError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::Fetchable;
use libgithub_core::object::FieldResult;
use libgithub_core::object::TYPE;

pub static UNIFORM_RESOURCE_LOCATABLE: Declaration = Declaration::new(
    "UniformResourceLocatable",
    None,
    &[
        ("resource_path", "resourcePath"),
        ("url", "url"),
    ],
    &[&TYPE],
);

/// Objects with an HTTP URL, which `resource(url:)` can locate.
#[allow(async_fn_in_trait)]
pub trait UniformResourceLocatable: Fetchable {
    async fn fetch_resource_path(&mut self) -> Result<String, ClientError> {
        self.fetch_field("resource_path").await
    }

    async fn fetch_url(&mut self) -> Result<String, ClientError> {
        self.fetch_field("url").await
    }

    /// The path of the object, relative to `https://github.com`.
    fn resource_path(&self) -> FieldResult<String> {
        self.field("resource_path")
    }

    fn url(&self) -> FieldResult<String> {
        self.field("url")
    }
}
