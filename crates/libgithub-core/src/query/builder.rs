use crate::query::Collection;
use crate::query::Field;
use crate::query::Fragment;
use crate::query::OperationKind;
use crate::query::QueryArgument;
use crate::query::QueryBuildError;
use crate::query::QueryNode;
use crate::query::SelectionSetTrait;
use crate::query::indent::indent;
use crate::query::selection_set_trait::collect_named_fragments;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// Assembles a complete query or mutation document.
///
/// ```
/// use libgithub_core::query::Builder;
/// use libgithub_core::query::Collection;
/// use libgithub_core::query::CollectionArgument;
/// use libgithub_core::query::Field;
/// use libgithub_core::query::QueryArgument;
///
/// let document = Builder::query()
///     .named("FetchLicense")
///     .add_argument(QueryArgument::new("key", "String!")).unwrap()
///     .add_collection(
///         Collection::new("license")
///             .add_argument(CollectionArgument::variable("key", "key")).unwrap()
///             .add_field(Field::new("name")).unwrap()
///     ).unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(document, "\
/// query FetchLicense ($key: String!) {
///   license(key: $key) {
///     name
///   }
/// }");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Builder {
    #[serde(default)]
    arguments: Vec<QueryArgument>,
    #[serde(default)]
    collections: Vec<Collection>,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    fragments: Vec<Fragment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, rename = "type")]
    operation_kind: OperationKind,
}

#[inherent]
impl SelectionSetTrait for Builder {
    /// Add a top-level [`Collection`] after any previously added ones.
    pub fn add_collection(mut self, collection: Collection) -> Result<Self> {
        self.collections.push(collection);
        Ok(self)
    }

    /// Add a top-level [`Field`] after any previously added ones.
    pub fn add_field(mut self, field: Field) -> Result<Self> {
        self.fields.push(field);
        Ok(self)
    }

    /// Add a named [`Fragment`] definition to the bottom of the document.
    pub fn add_fragment(mut self, fragment: Fragment) -> Result<Self> {
        if fragment.is_inline() {
            return Err(QueryBuildError::InlineFragmentAtDocumentRoot {
                type_condition: fragment.type_condition().to_string(),
            });
        }
        self.fragments.push(fragment);
        Ok(self)
    }

    /// Render the document text.
    ///
    /// Fragment definitions follow the operation, separated by blank lines:
    /// first those added with [`Builder::add_fragment()`], then any other
    /// named fragment spread somewhere in the document.
    pub fn build(&self) -> Result<String> {
        if self.is_empty() {
            return Err(QueryBuildError::EmptyDocument {
                document_name: self.name.to_owned(),
            });
        }
        if let Some(fragment) = self.fragments.iter().find(|f| f.is_inline()) {
            return Err(QueryBuildError::InlineFragmentAtDocumentRoot {
                type_condition: fragment.type_condition().to_string(),
            });
        }

        let mut head = format!("{} ", self.operation_kind);
        if let Some(name) = &self.name {
            head.push_str(name);
            head.push(' ');
        }
        if !self.arguments.is_empty() {
            let arguments =
                self.arguments.iter()
                    .map(QueryArgument::build)
                    .collect::<Vec<_>>();
            head.push_str(&format!("({}) ", arguments.join(", ")));
        }
        head.push('{');

        let mut lines = vec![head];
        for collection in &self.collections {
            lines.push(indent(&collection.build()?));
        }
        for field in &self.fields {
            lines.push(indent(&field.build()));
        }
        lines.push("}".to_string());

        let mut document = lines.join("\n");
        for fragment in self.fragment_definitions() {
            document.push_str("\n\n");
            document.push_str(&fragment.build()?);
        }

        Ok(document)
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The named fragments explicitly added to this document.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// A document is empty when it selects no collection and no field;
    /// fragment definitions alone select nothing.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.fields.is_empty()
    }
}

impl Builder {
    /// Declare a document variable.
    pub fn add_argument(mut self, argument: QueryArgument) -> Result<Self> {
        if self.arguments.iter().any(|arg| arg.name() == argument.name()) {
            return Err(QueryBuildError::DuplicateArgument {
                argument_name: argument.name().to_string(),
                parent_name: self.name.unwrap_or_else(
                    || self.operation_kind.to_string(),
                ),
            });
        }
        self.arguments.push(argument);
        Ok(self)
    }

    pub fn arguments(&self) -> &[QueryArgument] {
        &self.arguments
    }

    /// Every fragment definition the built document will carry, in
    /// emission order.
    pub fn fragment_definitions(&self) -> Vec<&Fragment> {
        let mut definitions = vec![];
        collect_named_fragments(
            &self.fragments,
            &self.collections,
            &mut definitions,
        );
        definitions
    }

    pub fn mutation() -> Self {
        Self::new(OperationKind::Mutation)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn new(operation_kind: OperationKind) -> Self {
        Self {
            operation_kind,
            ..Default::default()
        }
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn query() -> Self {
        Self::new(OperationKind::Query)
    }
}
impl QueryNode for Builder {
    const NODE_KIND: &'static str = "Builder";
}
