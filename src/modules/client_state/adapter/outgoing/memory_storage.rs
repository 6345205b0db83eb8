use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::modules::client_state::application::ports::outgoing::client_storage::{
    ClientStorage, StorageScope,
};

/// Process-local storage. `clear` simulates the user wiping a scope.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<(StorageScope, String), String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(StorageScope, String), String>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn clear(&self, scope: StorageScope) {
        self.lock().retain(|(s, _), _| *s != scope);
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        self.lock().get(&(scope, key.to_string())).cloned()
    }

    fn set(&self, scope: StorageScope, key: &str, value: &str) {
        self.lock().insert((scope, key.to_string()), value.to_string());
    }

    fn remove(&self, scope: StorageScope, key: &str) {
        self.lock().remove(&(scope, key.to_string()));
    }
}
