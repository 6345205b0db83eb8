pub mod seed_sync;

pub use seed_sync::{CategoryReport, SeedError, SeedReport, SeedSync};
