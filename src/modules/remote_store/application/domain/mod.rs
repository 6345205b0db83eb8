pub mod caller;
pub mod query;
pub mod record;

pub use caller::Caller;
pub use query::{Query, RawFilter, RawOrder, RawQuery};
pub use record::{Column, Record};
