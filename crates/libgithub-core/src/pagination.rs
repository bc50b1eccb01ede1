use serde::Deserialize;
use serde::Serialize;

/// One page of a GraphQL connection, read from its `nodes` and `pageInfo`
/// selections.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Page<T> {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub nodes: Vec<T>,
}
impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Convert each node while keeping the page position.
    pub fn try_map<U, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<Page<U>, E> {
        Ok(Page {
            end_cursor: self.end_cursor,
            has_next_page: self.has_next_page,
            nodes: self.nodes.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }
}
impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

/// The `pageInfo` selection of a connection.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}
