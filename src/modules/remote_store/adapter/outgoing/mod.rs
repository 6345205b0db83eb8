pub mod memory_store;
pub mod null_store;
pub mod postgrest_store;

pub use memory_store::InMemoryRemoteStore;
pub use null_store::NullRemoteStore;
pub use postgrest_store::PostgrestStore;
