pub mod run_seed;

pub use run_seed::run_seed_handler;
