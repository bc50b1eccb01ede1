use crate::query::Collection;
use crate::query::Field;
use crate::query::QueryBuildError;
use crate::query::QueryNode;
use crate::query::SelectionSetTrait;
use crate::query::indent::indent;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

type Result<T> = std::result::Result<T, QueryBuildError>;

/// A type-conditional selection.
///
/// A named fragment is defined once at the bottom of a document
/// (`fragment Name on Type { ... }`) and spread wherever it is selected
/// (`... Name`). An inline fragment is anonymous and rendered in place
/// (`... on Type { ... }`); GraphQL does not let inline fragments nest
/// further fragments, which [`Fragment::build_inline()`] enforces.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Fragment {
    #[serde(default)]
    collections: Vec<Collection>,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    fragments: Vec<Fragment>,
    #[serde(default)]
    inline: bool,
    name: String,
    #[serde(rename = "type")]
    type_condition: String,
}

#[inherent]
impl SelectionSetTrait for Fragment {
    pub fn add_collection(mut self, collection: Collection) -> Result<Self> {
        self.collections.push(collection);
        Ok(self)
    }

    pub fn add_field(mut self, field: Field) -> Result<Self> {
        self.fields.push(field);
        Ok(self)
    }

    /// Nested fragments are accepted here regardless of inline-ness; an
    /// inline fragment holding any is rejected when it is built.
    pub fn add_fragment(mut self, fragment: Fragment) -> Result<Self> {
        self.fragments.push(fragment);
        Ok(self)
    }

    /// Render this fragment's definition:
    /// `fragment Name on Type { ... }`.
    pub fn build(&self) -> Result<String> {
        if self.is_empty() {
            return Err(self.empty_error());
        }

        let mut lines = vec![format!(
            "fragment {} on {} {{",
            self.name,
            self.type_condition,
        )];
        for fragment in self.fragments.iter().filter(|f| f.is_inline()) {
            lines.push(indent(&fragment.build_inline()?));
        }
        for fragment in self.fragments.iter().filter(|f| !f.is_inline()) {
            lines.push(indent(&fragment.build_spread()?));
        }
        self.push_selections(&mut lines)?;
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

impl Fragment {
    /// Render this fragment in place: `... on Type { ... }`.
    pub fn build_inline(&self) -> Result<String> {
        if !self.fragments.is_empty() {
            return Err(QueryBuildError::InlineFragmentContainsFragments {
                type_condition: self.type_condition.to_owned(),
            });
        }
        if self.collections.is_empty() && self.fields.is_empty() {
            return Err(self.empty_error());
        }

        let mut lines = vec![format!("... on {} {{", self.type_condition)];
        self.push_selections(&mut lines)?;
        lines.push("}".to_string());

        Ok(lines.join("\n"))
    }

    /// Render a spread of this fragment: `... Name`.
    pub(super) fn build_spread(&self) -> Result<String> {
        if self.is_empty() {
            return Err(self.empty_error());
        }
        Ok(format!("... {}", self.name))
    }

    /// An anonymous fragment rendered in place. Its name mirrors the type
    /// condition and never appears in the built document.
    pub fn inline(type_condition: impl Into<String>) -> Self {
        let type_condition = type_condition.into();
        Self {
            collections: vec![],
            fields: vec![],
            fragments: vec![],
            inline: true,
            name: type_condition.to_owned(),
            type_condition,
        }
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Self {
        Self {
            collections: vec![],
            fields: vec![],
            fragments: vec![],
            inline: false,
            name: name.into(),
            type_condition: type_condition.into(),
        }
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    fn empty_error(&self) -> QueryBuildError {
        QueryBuildError::EmptyFragment {
            fragment_name: self.name.to_owned(),
            type_condition: self.type_condition.to_owned(),
        }
    }

    fn push_selections(&self, lines: &mut Vec<String>) -> Result<()> {
        for collection in &self.collections {
            lines.push(indent(&collection.build()?));
        }
        for field in &self.fields {
            lines.push(indent(&field.build()));
        }
        Ok(())
    }
}
impl QueryNode for Fragment {
    const NODE_KIND: &'static str = "Fragment";
}
