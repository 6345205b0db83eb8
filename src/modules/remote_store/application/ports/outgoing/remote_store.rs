// src/modules/remote_store/application/ports/outgoing/remote_store.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::remote_store::application::domain::query::{RawFilter, RawQuery};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteStoreError {
    #[error("Remote store is not configured")]
    NotConfigured,

    /// Network, DNS, TLS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store answered with a non-2xx status.
    #[error("Remote store error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (hosted table store)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// `false` for the null store selected when no backend is configured.
    fn is_configured(&self) -> bool;

    /// The same store, sending `access_token` as the bearer instead of the
    /// public API key.
    fn as_user(&self, access_token: &str) -> Arc<dyn RemoteStore>;

    async fn select(&self, table: &str, query: &RawQuery) -> Result<Vec<Value>, RemoteStoreError>;

    /// Head-only count of rows matching every filter.
    async fn count(&self, table: &str, filters: &[RawFilter]) -> Result<u64, RemoteStoreError>;

    /// Bulk insert. All-or-nothing: either every row is stored or an error is returned.
    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, RemoteStoreError>;

    /// Merge `patch` into every row matching `key`; returns the updated rows.
    async fn update(
        &self,
        table: &str,
        key: &RawFilter,
        patch: Value,
    ) -> Result<Vec<Value>, RemoteStoreError>;

    async fn delete(&self, table: &str, key: &RawFilter) -> Result<(), RemoteStoreError>;

    async fn ping(&self) -> Result<(), RemoteStoreError>;
}
