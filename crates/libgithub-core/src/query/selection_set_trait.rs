use crate::query::Collection;
use crate::query::Field;
use crate::query::Fragment;
use crate::query::QueryBuildError;

/// Used to constrain the common functions that should be present on every
/// query node that owns a selection set: [`Builder`](crate::query::Builder),
/// [`Collection`] and [`Fragment`].
pub(super) trait SelectionSetTrait where Self: Sized {
    fn add_collection(
        self,
        collection: Collection,
    ) -> Result<Self, QueryBuildError>;

    fn add_field(self, field: Field) -> Result<Self, QueryBuildError>;

    fn add_fragment(
        self,
        fragment: Fragment,
    ) -> Result<Self, QueryBuildError>;

    fn build(&self) -> Result<String, QueryBuildError>;

    fn collections(&self) -> &[Collection];

    fn fields(&self) -> &[Field];

    fn fragments(&self) -> &[Fragment];

    fn is_empty(&self) -> bool;
}

/// Appends `fragment` and every named fragment reachable from it to `out`,
/// skipping names already present. Inline fragments are not definitions,
/// but the collections they select may spread named fragments.
pub(super) fn collect_named_fragments<'a>(
    fragments: &'a [Fragment],
    collections: &'a [Collection],
    out: &mut Vec<&'a Fragment>,
) {
    for fragment in fragments {
        if fragment.is_inline() {
            collect_named_fragments(&[], fragment.collections(), out);
            continue;
        }
        if out.iter().any(|seen| seen.name() == fragment.name()) {
            continue;
        }
        out.push(fragment);
        collect_named_fragments(
            fragment.fragments(),
            fragment.collections(),
            out,
        );
    }

    for collection in collections {
        collect_named_fragments(
            collection.fragments(),
            collection.collections(),
            out,
        );
    }
}
