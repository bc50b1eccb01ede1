use crate::fields::TYPENAME;
use crate::fields::selector_key;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Friendly name to GraphQL selector, in declaration order.
pub type FieldTable = IndexMap<&'static str, &'static str>;

/// The static field declarations of a GraphQL object type or interface.
///
/// A declaration lists the fields it introduces itself along with the
/// declarations it composes (the interfaces a type implements). The full
/// table of a type is resolved once, on first use, by walking those bases
/// depth-first from the most-derived declaration: the first declaration of
/// a friendly name wins, so a type always overrides the interfaces it
/// implements, and an earlier-listed interface overrides a later one.
///
/// ```
/// use libgithub_core::fields::Declaration;
///
/// static TIMESTAMPED: Declaration = Declaration::new(
///     "Timestamped",
///     None,
///     &[("created_at", "createdAt")],
///     &[],
/// );
/// static GIST: Declaration = Declaration::new(
///     "Gist",
///     None,
///     &[("name", "name")],
///     &[&TIMESTAMPED],
/// );
///
/// assert_eq!(GIST.merged_fields(None), vec!["name", "createdAt"]);
/// assert_eq!(
///     GIST.merged_fields(Some(&["created_at"])),
///     vec!["createdAt", "__typename"],
/// );
/// ```
#[derive(Debug)]
pub struct Declaration {
    bases: &'static [&'static Declaration],
    fields: &'static [(&'static str, &'static str)],
    graphql_type: Option<&'static str>,
    resolved: OnceLock<FieldTable>,
    type_name: &'static str,
}
impl Declaration {
    pub fn bases(&self) -> &'static [&'static Declaration] {
        self.bases
    }

    /// The full field table of this declaration, including every field
    /// composed from its bases.
    pub fn defined_fields(&self) -> &FieldTable {
        self.resolved.get_or_init(|| {
            let mut table = FieldTable::new();
            self.collect_fields(&mut table);
            log::trace!(
                "Resolved {} fields for the `{}` declaration.",
                table.len(),
                self.type_name,
            );
            table
        })
    }

    /// The GraphQL type or interface name used in documents. Falls back to
    /// the Rust type name when no GraphQL name was declared.
    pub fn graphql_type(&self) -> &'static str {
        self.graphql_type.unwrap_or(self.type_name)
    }

    /// The selectors to request for this type.
    ///
    /// Without `requested`, every selector of the full table is returned in
    /// declaration order. Otherwise each requested name is translated
    /// through the table, in the order given; names the table does not know
    /// pass through untouched so raw GraphQL field names can be requested
    /// directly. A `__typename` selector is appended to requested lists that
    /// lack one.
    pub fn merged_fields(&self, requested: Option<&[&str]>) -> Vec<String> {
        let table = self.defined_fields();
        let Some(requested) = requested else {
            return table.values().map(|selector| selector.to_string()).collect();
        };

        let mut selectors =
            requested.iter()
                .map(|name| self.selector(name).unwrap_or(*name).to_string())
                .collect::<Vec<_>>();
        if !selectors.iter().any(|selector| selector_key(selector) == TYPENAME) {
            selectors.push(TYPENAME.to_string());
        }
        selectors
    }

    pub const fn new(
        type_name: &'static str,
        graphql_type: Option<&'static str>,
        fields: &'static [(&'static str, &'static str)],
        bases: &'static [&'static Declaration],
    ) -> Self {
        Self {
            bases,
            fields,
            graphql_type,
            resolved: OnceLock::new(),
            type_name,
        }
    }

    /// The response key the friendly `name` is read from: the key of its
    /// selector, or `name` itself when it is not declared.
    pub fn response_key<'a>(&self, name: &'a str) -> &'a str {
        selector_key(self.selector(name).unwrap_or(name))
    }

    pub fn selector(&self, name: &str) -> Option<&'static str> {
        self.defined_fields().get(name).copied()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn collect_fields(&self, table: &mut FieldTable) {
        for &(name, selector) in self.fields {
            table.entry(name).or_insert(selector);
        }
        for base in self.bases {
            base.collect_fields(table);
        }
    }
}
