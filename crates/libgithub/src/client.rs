use crate::config::ClientConfig;
use crate::http::HttpTransport;
use crate::objects::AnyNode;
use crate::objects::AuthenticatedUser;
use crate::objects::BOT;
use crate::objects::ISSUE_COMMENT;
use crate::objects::LICENSE;
use crate::objects::License;
use crate::objects::ORGANIZATION;
use crate::objects::Organization;
use crate::objects::REPOSITORY;
use crate::objects::Repository;
use crate::objects::RepositoryOwnerKind;
use crate::objects::USER;
use crate::objects::UserAccount;
use libgithub_core::error::ClientError;
use libgithub_core::error::GraphQLError;
use libgithub_core::fields::Declaration;
use libgithub_core::fields::TYPENAME;
use libgithub_core::object::FromPayload;
use libgithub_core::query::Builder;
use libgithub_core::query::Collection;
use libgithub_core::query::CollectionArgument;
use libgithub_core::query::Field;
use libgithub_core::query::Fragment;
use libgithub_core::query::QueryArgument;
use libgithub_core::query::QueryBuildError;
use libgithub_core::transport::Requester;
use libgithub_core::transport::Transport;
use libgithub_core::transport::Variables;
use serde_json::Value;

type Result<T> = std::result::Result<T, ClientError>;

/// The node types [`AnyNode`] materializes into typed objects.
static NODE_TYPES: &[&Declaration] = &[
    &BOT,
    &ISSUE_COMMENT,
    &LICENSE,
    &ORGANIZATION,
    &REPOSITORY,
    &USER,
];

static REPOSITORY_OWNER_TYPES: &[&Declaration] = &[&USER, &ORGANIZATION];

/// A root field lookup: `{name}({argument}: ${argument}, ...)`.
struct Root<'a> {
    arguments: Vec<(&'static str, &'static str, Value)>,
    name: &'static str,
    operation: &'a str,
}
impl<'a> Root<'a> {
    fn new(operation: &'a str, name: &'static str) -> Self {
        Self {
            arguments: vec![],
            name,
            operation,
        }
    }

    fn with_argument(
        mut self,
        name: &'static str,
        type_annotation: &'static str,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.push((name, type_annotation, value.into()));
        self
    }
}

/// The entry point to GitHub's GraphQL API.
///
/// Every `fetch_*` method takes an optional list of friendly field names to
/// load; `None` loads every field the returned type declares. Fields left
/// out can still be loaded later through the `fetch_*` methods of the
/// returned object.
#[derive(Clone, Debug)]
pub struct GitHub {
    requester: Requester,
}
impl GitHub {
    /// The user the client is authenticated as.
    pub async fn fetch_viewer(
        &self,
        fields: Option<&[&str]>,
    ) -> Result<AuthenticatedUser> {
        self.fetch_object(Root::new("FetchViewer", "viewer"), &[&USER], fields)
            .await
    }

    /// A user by login, promoted to an [`AuthenticatedUser`] when it is the
    /// viewer.
    pub async fn fetch_user(
        &self,
        login: &str,
        fields: Option<&[&str]>,
    ) -> Result<UserAccount> {
        let mut requested;
        let fields = match fields {
            Some(fields) if !fields.contains(&"is_viewer") => {
                requested = fields.to_vec();
                requested.push("is_viewer");
                Some(requested.as_slice())
            },
            fields => fields,
        };
        self.fetch_object(
            Root::new("FetchUser", "user").with_argument("login", "String!", login),
            &[&USER],
            fields,
        ).await
    }

    pub async fn fetch_organization(
        &self,
        login: &str,
        fields: Option<&[&str]>,
    ) -> Result<Organization> {
        self.fetch_object(
            Root::new("FetchOrganization", "organization")
                .with_argument("login", "String!", login),
            &[&ORGANIZATION],
            fields,
        ).await
    }

    /// A user or organization by login. Requested field names are
    /// translated separately for each possible owner type.
    pub async fn fetch_repository_owner(
        &self,
        login: &str,
        fields: Option<&[&str]>,
    ) -> Result<RepositoryOwnerKind> {
        self.fetch_object(
            Root::new("FetchRepositoryOwner", "repositoryOwner")
                .with_argument("login", "String!", login),
            REPOSITORY_OWNER_TYPES,
            fields,
        ).await
    }

    pub async fn fetch_repository(
        &self,
        owner: &str,
        name: &str,
        fields: Option<&[&str]>,
    ) -> Result<Repository> {
        self.fetch_object(
            Root::new("FetchRepository", "repository")
                .with_argument("owner", "String!", owner)
                .with_argument("name", "String!", name),
            &[&REPOSITORY],
            fields,
        ).await
    }

    pub async fn fetch_license(
        &self,
        key: &str,
        fields: Option<&[&str]>,
    ) -> Result<License> {
        self.fetch_object(
            Root::new("FetchLicense", "license").with_argument("key", "String!", key),
            &[&LICENSE],
            fields,
        ).await
    }

    /// Every license GitHub knows of.
    pub async fn fetch_licenses(&self, fields: Option<&[&str]>) -> Result<Vec<License>> {
        let licenses =
            self.fetch_root(Root::new("FetchLicenses", "licenses"), &[&LICENSE], fields)
                .await?;
        License::from_values(without_nulls(licenses), &self.requester)
    }

    /// Any object by its global node ID.
    ///
    /// Without `fields`, only the `id` and `__typename` of the node are
    /// loaded and everything else is fetched lazily. Requested field names
    /// are translated separately for each node type in [`AnyNode`].
    pub async fn fetch_node(
        &self,
        id: &str,
        fields: Option<&[&str]>,
    ) -> Result<AnyNode> {
        self.fetch_object(
            Root::new("FetchNode", "node").with_argument("id", "ID!", id),
            NODE_TYPES,
            fields.or(Some(&[])),
        ).await
    }

    /// Like [`GitHub::fetch_node()`] for several IDs at once. IDs that do not
    /// resolve to a node yield `None`, in place.
    pub async fn fetch_nodes(
        &self,
        ids: &[&str],
        fields: Option<&[&str]>,
    ) -> Result<Vec<Option<AnyNode>>> {
        let nodes = self.fetch_root(
            Root::new("FetchNodes", "nodes").with_argument("ids", "[ID!]!", ids.to_vec()),
            NODE_TYPES,
            fields.or(Some(&[])),
        ).await?;

        let Value::Array(nodes) = nodes else {
            return Err(GraphQLError::internal(
                "The `nodes` root field is not a list.",
            ).into());
        };
        nodes.into_iter()
            .map(|node| match node {
                Value::Null => Ok(None),
                node => AnyNode::from_value(node, &self.requester).map(Some),
            })
            .collect()
    }

    /// A license known only by its key, without a request. Its other fields
    /// are fetched on first use.
    pub fn license(&self, key: &str) -> License {
        License::from_key(key, &self.requester)
    }

    /// A client talking to the endpoint in `config` over HTTP.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Run a raw GraphQL document and return the `data` of the response.
    pub async fn query(&self, document: &str, variables: Variables) -> Result<Value> {
        self.requester.request(document, None, variables).await
    }

    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    pub fn with_requester(requester: Requester) -> Self {
        Self { requester }
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self::with_requester(Requester::new(transport))
    }

    async fn fetch_object<T: FromPayload>(
        &self,
        root: Root<'_>,
        candidates: &[&'static Declaration],
        fields: Option<&[&str]>,
    ) -> Result<T> {
        let description = describe_root(&root);
        match self.fetch_root(root, candidates, fields).await? {
            Value::Null => Err(GraphQLError::not_found(format!(
                "Could not resolve to {description}.",
            )).into()),
            object => T::from_value(object, &self.requester),
        }
    }

    async fn fetch_root(
        &self,
        root: Root<'_>,
        candidates: &[&'static Declaration],
        fields: Option<&[&str]>,
    ) -> Result<Value> {
        let mut builder = Builder::query().named(root.operation);
        let mut collection = Collection::new(root.name);
        let mut variables = Variables::new();
        for (name, type_annotation, value) in root.arguments {
            builder = builder.add_argument(QueryArgument::new(name, type_annotation))?;
            collection = collection.add_argument(CollectionArgument::variable(name, name))?;
            variables.insert(name.to_string(), value);
        }
        builder = builder.add_collection(select(collection, candidates, fields)?)?;

        let mut data = self.requester.execute(&builder, variables).await?;
        data.get_mut(root.name).map(Value::take).ok_or_else(|| {
            GraphQLError::internal(format!(
                "The response lacks the `{}` root field.",
                root.name,
            )).into()
        })
    }
}

fn describe_root(root: &Root<'_>) -> String {
    let arguments =
        root.arguments.iter()
            .map(|(name, _, value)| format!("the {name} {value}"))
            .collect::<Vec<_>>();
    match arguments.is_empty() {
        true => format!("a `{}`", root.name),
        false => format!("a `{}` with {}", root.name, arguments.join(" and ")),
    }
}

/// Select `fields` of the only candidate directly, or of each of several
/// candidates through an inline fragment on its type.
fn select(
    mut collection: Collection,
    candidates: &[&'static Declaration],
    fields: Option<&[&str]>,
) -> std::result::Result<Collection, QueryBuildError> {
    if let [declaration] = candidates {
        for selector in declaration.merged_fields(fields) {
            collection = collection.add_field(Field::new(selector))?;
        }
        return Ok(collection);
    }

    collection =
        collection
            .add_field(Field::new("id"))?
            .add_field(Field::new(TYPENAME))?;
    if fields.is_some_and(|fields| fields.is_empty()) {
        return Ok(collection);
    }
    for declaration in candidates {
        let selectors = match fields {
            None => declaration.merged_fields(None),
            Some(fields) => {
                let names = candidate_fields(declaration, candidates, fields);
                if names.is_empty() {
                    continue;
                }
                declaration.merged_fields(Some(names.as_slice()))
            },
        };
        let mut fragment = Fragment::inline(declaration.graphql_type());
        for selector in selectors {
            fragment = fragment.add_field(Field::new(selector))?;
        }
        collection = collection.add_fragment(fragment)?;
    }
    Ok(collection)
}

/// The requested names that belong in the fragment on `declaration`: the
/// ones it declares, plus raw selectors no candidate declares.
fn candidate_fields<'a>(
    declaration: &Declaration,
    candidates: &[&'static Declaration],
    fields: &[&'a str],
) -> Vec<&'a str> {
    fields.iter()
        .copied()
        .filter(|name| {
            declaration.selector(name).is_some()
                || candidates.iter().all(|other| other.selector(name).is_none())
        })
        .collect()
}

fn without_nulls(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items.into_iter().filter(|item| !item.is_null()).collect(),
        ),
        other => other,
    }
}
