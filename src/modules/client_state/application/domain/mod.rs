pub mod keys;
pub mod preferences;

pub use preferences::{Preferences, Theme};
