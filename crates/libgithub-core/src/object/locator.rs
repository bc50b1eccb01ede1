use crate::error::ClientError;
use crate::error::GraphQLError;
use crate::fields::Declaration;
use crate::object::Payload;
use crate::query::Builder;
use crate::query::Collection;
use crate::query::CollectionArgument;
use crate::query::Field;
use crate::query::Fragment;
use crate::query::QueryArgument;
use crate::query::QueryBuildError;
use crate::transport::Variables;
use serde_json::Value;

/// How an already-materialized object is found again on the server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Locator {
    /// A root field taking one identifying argument and returning the
    /// object's own type, e.g. `license(key: $key)`.
    Keyed {
        argument: &'static str,
        argument_type: &'static str,
        root: &'static str,
        value: String,
    },
    /// The `node(id:)` root, narrowed with an inline fragment.
    Node {
        id: String,
    },
    /// The `resource(url:)` root, narrowed with an inline fragment.
    Resource {
        url: String,
    },
}
impl Locator {
    /// Pull the located object out of the response `data`.
    ///
    /// A `null` root means the object no longer exists, or is no longer
    /// visible to the requesting token.
    pub fn extract(&self, mut data: Value) -> Result<Payload, ClientError> {
        let root = self.root();
        match data.get_mut(root).map(Value::take) {
            None => Err(GraphQLError::internal(format!(
                "The response lacks the `{root}` root field.",
            )).into()),
            Some(Value::Null) => Err(GraphQLError::not_found(format!(
                "Could not resolve to an object with the {} `{}`.",
                self.argument(),
                self.value(),
            )).into()),
            Some(object) => Ok(Payload::from_value(object)?),
        }
    }

    /// A query selecting `selectors` on the located object of type
    /// `declaration`, along with its variables.
    pub fn query(
        &self,
        declaration: &Declaration,
        selectors: &[String],
    ) -> Result<(Builder, Variables), QueryBuildError> {
        let argument = self.argument();
        let mut root =
            Collection::new(self.root())
                .add_argument(CollectionArgument::variable(argument, argument))?;

        root = match self {
            Self::Keyed { .. } => add_fields(root, selectors)?,
            Self::Node { .. } | Self::Resource { .. } => {
                let fragment = add_fields(
                    Fragment::inline(declaration.graphql_type()),
                    selectors,
                )?;
                root.add_fragment(fragment)?
            },
        };

        let builder =
            Builder::query()
                .named(format!("Fetch{}Fields", declaration.type_name()))
                .add_argument(QueryArgument::new(argument, self.argument_type()))?
                .add_collection(root)?;

        let mut variables = Variables::new();
        variables.insert(argument.to_string(), Value::String(self.value().to_string()));
        Ok((builder, variables))
    }

    /// The response key the located object comes back under.
    pub fn root(&self) -> &'static str {
        match self {
            Self::Keyed { root, .. } => *root,
            Self::Node { .. } => "node",
            Self::Resource { .. } => "resource",
        }
    }

    fn argument(&self) -> &'static str {
        match self {
            Self::Keyed { argument, .. } => *argument,
            Self::Node { .. } => "id",
            Self::Resource { .. } => "url",
        }
    }

    fn argument_type(&self) -> &'static str {
        match self {
            Self::Keyed { argument_type, .. } => *argument_type,
            Self::Node { .. } => "ID!",
            Self::Resource { .. } => "URI!",
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Keyed { value, .. } => value,
            Self::Node { id } => id,
            Self::Resource { url } => url,
        }
    }
}

trait AddField: Sized {
    fn add_selector(self, field: Field) -> Result<Self, QueryBuildError>;
}
impl AddField for Collection {
    fn add_selector(self, field: Field) -> Result<Self, QueryBuildError> {
        self.add_field(field)
    }
}
impl AddField for Fragment {
    fn add_selector(self, field: Field) -> Result<Self, QueryBuildError> {
        self.add_field(field)
    }
}

fn add_fields<T: AddField>(
    mut node: T,
    selectors: &[String],
) -> Result<T, QueryBuildError> {
    for selector in selectors {
        node = node.add_selector(Field::new(selector.as_str()))?;
    }
    Ok(node)
}
