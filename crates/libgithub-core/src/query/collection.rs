use crate::query::CollectionArgument;
use crate::query::Field;
use crate::query::Fragment;
use crate::query::QueryBuildError;
use crate::query::QueryNode;
use crate::query::SelectionSetTrait;
use crate::query::indent::indent;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// A nested selection set: `alias: name(arguments) { ... }`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Collection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(default)]
    arguments: Vec<CollectionArgument>,
    #[serde(default)]
    collections: Vec<Collection>,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    fragments: Vec<Fragment>,
    name: String,
}

#[inherent]
impl SelectionSetTrait for Collection {
    /// Add a nested [`Collection`] after any previously added ones.
    ///
    /// Nesting a collection inside itself requires handing over a copy
    /// (`collection.clone().add_collection(collection)`), so the nested
    /// value is always distinct from its parent.
    pub fn add_collection(mut self, collection: Collection) -> Result<Self> {
        self.collections.push(collection);
        Ok(self)
    }

    pub fn add_field(mut self, field: Field) -> Result<Self> {
        self.fields.push(field);
        Ok(self)
    }

    /// Inline fragments are rendered in place; named fragments are
    /// rendered as spreads and their definitions are emitted by the
    /// enclosing [`Builder`](crate::query::Builder).
    pub fn add_fragment(mut self, fragment: Fragment) -> Result<Self> {
        self.fragments.push(fragment);
        Ok(self)
    }

    pub fn build(&self) -> Result<String> {
        if self.is_empty() {
            return Err(QueryBuildError::EmptyCollection {
                collection_name: self.name.to_owned(),
            });
        }

        let mut head = String::new();
        if let Some(alias) = &self.alias {
            head.push_str(alias);
            head.push_str(": ");
        }
        head.push_str(&self.name);
        if !self.arguments.is_empty() {
            let arguments =
                self.arguments.iter()
                    .map(CollectionArgument::build)
                    .collect::<Vec<_>>();
            head.push_str(&format!("({})", arguments.join(", ")));
        }

        let mut lines = vec![format!("{head} {{")];
        for fragment in self.fragments.iter().filter(|f| f.is_inline()) {
            lines.push(indent(&fragment.build_inline()?));
        }
        for fragment in self.fragments.iter().filter(|f| !f.is_inline()) {
            lines.push(indent(&fragment.build_spread()?));
        }
        for collection in &self.collections {
            lines.push(indent(&collection.build()?));
        }
        for field in &self.fields {
            lines.push(indent(&field.build()));
        }
        lines.push("}".to_string());

        Ok(lines.join("\n"))
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
            && self.fields.is_empty()
            && self.fragments.is_empty()
    }
}

impl Collection {
    pub fn add_argument(mut self, argument: CollectionArgument) -> Result<Self> {
        if self.arguments.iter().any(|arg| arg.name() == argument.name()) {
            return Err(QueryBuildError::DuplicateArgument {
                argument_name: argument.name().to_string(),
                parent_name: self.name,
            });
        }
        self.arguments.push(argument);
        Ok(self)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[CollectionArgument] {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            collections: vec![],
            fields: vec![],
            fragments: vec![],
            name: name.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
impl QueryNode for Collection {
    const NODE_KIND: &'static str = "Collection";
}
