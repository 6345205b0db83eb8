use serde::{de::DeserializeOwned, Serialize};

/// A column of a remote table. Implemented by one enum per entity so that
/// filters and orderings can only name columns the entity actually has.
pub trait Column: Copy + Send + Sync + 'static {
    fn name(&self) -> &'static str;
}

/// A typed row of a remote table.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    const TABLE: &'static str;

    type Column: Column;

    /// Column used by single-record update/delete.
    fn key_column() -> Self::Column;
}
