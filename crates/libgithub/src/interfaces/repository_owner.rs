use crate::interfaces::Actor;
use crate::interfaces::UNIFORM_RESOURCE_LOCATABLE;
use crate::objects::REPOSITORY;
use crate::objects::Repository;
use libgithub_core::error::ClientError;
use libgithub_core::error::GraphQLError;
use libgithub_core::fields::Declaration;
use libgithub_core::object::FromPayload;
use libgithub_core::object::NODE;
use libgithub_core::object::Node;
use libgithub_core::pagination::Page;
use libgithub_core::pagination::PageInfo;
use libgithub_core::query::Builder;
use libgithub_core::query::Collection;
use libgithub_core::query::CollectionArgument;
use libgithub_core::query::Field;
use libgithub_core::query::QueryArgument;
use libgithub_core::transport::Variables;
use serde_json::Value;

pub static REPOSITORY_OWNER: Declaration = Declaration::new(
    "RepositoryOwner",
    None,
    &[
        ("avatar_url", "avatarUrl"),
        ("login", "login"),
    ],
    &[&NODE, &UNIFORM_RESOURCE_LOCATABLE],
);

/// A user or organization that owns repositories.
#[allow(async_fn_in_trait)]
pub trait RepositoryOwner: Actor + Node {
    /// One page of the repositories this owner owns, each materialized with
    /// every field a [`Repository`] declares.
    ///
    /// Pass the `end_cursor` of the previous page as `after` to continue.
    async fn fetch_repositories(
        &mut self,
        first: u32,
        after: Option<&str>,
    ) -> Result<Page<Repository>, ClientError> {
        let login = self.fetch_login().await?;

        let mut nodes = Collection::new("nodes");
        for selector in REPOSITORY.merged_fields(None) {
            nodes = nodes.add_field(Field::new(selector))?;
        }
        let page_info =
            Collection::new("pageInfo")
                .add_field(Field::new("endCursor"))?
                .add_field(Field::new("hasNextPage"))?;
        let builder =
            Builder::query()
                .named("FetchRepositories")
                .add_argument(QueryArgument::new("login", "String!"))?
                .add_argument(QueryArgument::new("first", "Int!"))?
                .add_argument(QueryArgument::new("after", "String"))?
                .add_collection(
                    Collection::new("repositoryOwner")
                        .add_argument(CollectionArgument::variable("login", "login"))?
                        .add_collection(
                            Collection::new("repositories")
                                .add_argument(CollectionArgument::variable("first", "first"))?
                                .add_argument(CollectionArgument::variable("after", "after"))?
                                .add_collection(page_info)?
                                .add_collection(nodes)?
                        )?
                )?;

        let mut variables = Variables::new();
        variables.insert("login".to_string(), Value::String(login.to_owned()));
        variables.insert("first".to_string(), Value::from(first));
        if let Some(after) = after {
            variables.insert("after".to_string(), Value::String(after.to_string()));
        }

        let mut data = self.requester().execute(&builder, variables).await?;
        let mut repositories = match data.get_mut("repositoryOwner").map(Value::take) {
            Some(Value::Null) => return Err(GraphQLError::not_found(format!(
                "Could not resolve to a RepositoryOwner with the login of '{login}'.",
            )).into()),
            Some(owner) => owner,
            None => return Err(GraphQLError::internal(
                "The response lacks the `repositoryOwner` root field.",
            ).into()),
        };

        let page_info: PageInfo =
            serde_json::from_value(take_pointer(&mut repositories, "/repositories/pageInfo"))
                .map_err(|err| GraphQLError::internal(format!(
                    "The repositories page of `{login}` has malformed page info: {err}",
                )))?;
        let nodes = Repository::from_values(
            take_pointer(&mut repositories, "/repositories/nodes"),
            self.requester(),
        )?;

        Ok(Page {
            end_cursor: page_info.end_cursor,
            has_next_page: page_info.has_next_page,
            nodes,
        })
    }
}

fn take_pointer(value: &mut Value, pointer: &str) -> Value {
    value.pointer_mut(pointer).map(Value::take).unwrap_or_default()
}
