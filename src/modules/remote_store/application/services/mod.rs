pub mod collection;
pub mod data_access;

pub use collection::{CollectionResource, CollectionState};
pub use data_access::DataAccess;
