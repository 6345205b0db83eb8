pub mod cookie_storage;
pub mod memory_storage;

pub use cookie_storage::{CookiePolicy, CookieStorage};
pub use memory_storage::MemoryStorage;
