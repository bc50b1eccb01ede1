//! Protocol-level building blocks of the `libgithub` client: query document
//! construction, per-type field declarations, payload-backed objects with
//! lazy field fetching, and the transport contract those objects are
//! fetched through.

pub mod error;
pub mod fields;
pub mod object;
pub mod pagination;
pub mod query;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_utils;
