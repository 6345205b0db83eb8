use tracing::warn;

use crate::modules::client_state::application::domain::keys::THEME_PREFERENCES;
use crate::modules::client_state::application::domain::Preferences;
use crate::modules::client_state::application::ports::outgoing::{ClientStorage, StorageScope};

/// Reads and writes display preferences in durable client storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferencesService;

impl PreferencesService {
    pub fn new() -> Self {
        Self
    }

    /// Stored preferences, or the defaults when nothing (or garbage) is stored.
    pub fn load(&self, storage: &dyn ClientStorage) -> Preferences {
        let Some(raw) = storage.get(StorageScope::Durable, THEME_PREFERENCES) else {
            return Preferences::default();
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Discarding unreadable stored preferences");
            Preferences::default()
        })
    }

    pub fn save(&self, storage: &dyn ClientStorage, preferences: Preferences) -> Preferences {
        match serde_json::to_string(&preferences) {
            Ok(raw) => storage.set(StorageScope::Durable, THEME_PREFERENCES, &raw),
            Err(e) => warn!(error = %e, "Failed to serialize preferences"),
        }
        preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::client_state::adapter::outgoing::MemoryStorage;
    use crate::modules::client_state::application::domain::Theme;

    #[test]
    fn defaults_when_nothing_is_stored() {
        let storage = MemoryStorage::new();
        assert_eq!(PreferencesService.load(&storage), Preferences::default());
    }

    #[test]
    fn saved_preferences_survive_a_reload() {
        let storage = MemoryStorage::new();
        let prefs = Preferences {
            theme: Theme::Dark,
            animations_enabled: false,
        };

        PreferencesService.save(&storage, prefs);

        assert_eq!(PreferencesService.load(&storage), prefs);
        assert!(storage
            .get(StorageScope::Durable, THEME_PREFERENCES)
            .is_some());
    }

    #[test]
    fn corrupt_stored_value_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        storage.set(StorageScope::Durable, THEME_PREFERENCES, "{not json");

        assert_eq!(PreferencesService.load(&storage), Preferences::default());
    }
}
