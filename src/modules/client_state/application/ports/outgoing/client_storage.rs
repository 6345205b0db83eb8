/// Lifetime of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Survives reloads and restarts of the same browser profile.
    Durable,
    /// Cleared when the tab/browser session ends.
    Session,
}

/// Per-browser key/value storage.
pub trait ClientStorage: Send + Sync {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String>;

    fn set(&self, scope: StorageScope, key: &str, value: &str);

    fn remove(&self, scope: StorageScope, key: &str);
}
