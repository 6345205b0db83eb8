mod preferences;

pub use preferences::{get_preferences_handler, put_preferences_handler};
