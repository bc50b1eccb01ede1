mod declaration;
mod selector;

pub use declaration::Declaration;
pub use declaration::FieldTable;
pub use selector::TYPENAME;
pub use selector::selector_key;

#[cfg(test)]
mod tests;
