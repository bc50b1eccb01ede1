use libgithub_core::error::ClientError;
use libgithub_core::error::GraphQLError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::Fetchable;
use libgithub_core::object::FieldResult;
use libgithub_core::object::NODE;
use libgithub_core::object::Node;
use libgithub_core::query::Builder;
use libgithub_core::query::Collection;
use libgithub_core::query::CollectionArgument;
use libgithub_core::query::Field;
use libgithub_core::query::QueryArgument;
use libgithub_core::transport::Variables;
use serde_json::Value;

pub static STARRABLE: Declaration = Declaration::new(
    "Starrable",
    None,
    &[
        ("stargazer_count", "stargazerCount"),
        ("viewer_has_starred", "viewerHasStarred"),
    ],
    &[&NODE],
);

/// Things the viewer can star.
#[allow(async_fn_in_trait)]
pub trait Starrable: Node + Fetchable {
    /// Star this object as the viewer, then store the updated star count and
    /// starred state.
    async fn add_star(&mut self) -> Result<(), ClientError> {
        toggle_star(self, "addStar", "AddStar").await
    }

    async fn fetch_stargazer_count(&mut self) -> Result<u64, ClientError> {
        self.fetch_field("stargazer_count").await
    }

    async fn fetch_viewer_has_starred(&mut self) -> Result<bool, ClientError> {
        self.fetch_field("viewer_has_starred").await
    }

    async fn remove_star(&mut self) -> Result<(), ClientError> {
        toggle_star(self, "removeStar", "RemoveStar").await
    }

    fn stargazer_count(&self) -> FieldResult<u64> {
        self.field("stargazer_count")
    }

    fn viewer_has_starred(&self) -> FieldResult<bool> {
        self.field("viewer_has_starred")
    }
}

async fn toggle_star<T>(
    starrable: &mut T,
    mutation: &str,
    operation: &str,
) -> Result<(), ClientError>
where
    T: Starrable + ?Sized,
{
    let id: String = starrable.fetch_field("id").await?;

    let mut selection = Collection::new("starrable");
    for selector in STARRABLE.merged_fields(Some(&["stargazer_count", "viewer_has_starred"])) {
        selection = selection.add_field(Field::new(selector))?;
    }
    let builder =
        Builder::mutation()
            .named(operation)
            .add_argument(QueryArgument::new("starrableId", "ID!"))?
            .add_collection(
                Collection::new(mutation)
                    .add_argument(CollectionArgument::new(
                        "input",
                        "{starrableId: $starrableId}",
                    ))?
                    .add_collection(selection)?
            )?;

    let mut variables = Variables::new();
    variables.insert("starrableId".to_string(), Value::String(id));
    log::debug!("Running `{mutation}` on a `{}`.", T::DECLARATION.type_name());

    let mut data = starrable.requester().execute(&builder, variables).await?;
    let fields = data.pointer_mut(&format!("/{mutation}/starrable")).map(Value::take);
    match fields {
        Some(fields @ Value::Object(_)) => starrable.patch(fields),
        _ => Err(GraphQLError::internal(format!(
            "The `{mutation}` response lacks the starred object.",
        )).into()),
    }
}
