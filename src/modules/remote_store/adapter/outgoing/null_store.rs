use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::remote_store::application::domain::query::{RawFilter, RawQuery};
use crate::modules::remote_store::application::ports::outgoing::remote_store::{
    RemoteStore, RemoteStoreError,
};

/// Store used when no backend is configured. Makes no network calls and
/// answers every operation with an empty result so pages stay renderable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRemoteStore;

#[async_trait]
impl RemoteStore for NullRemoteStore {
    fn is_configured(&self) -> bool {
        false
    }

    fn as_user(&self, _access_token: &str) -> Arc<dyn RemoteStore> {
        Arc::new(NullRemoteStore)
    }

    async fn select(&self, _table: &str, _query: &RawQuery) -> Result<Vec<Value>, RemoteStoreError> {
        Ok(Vec::new())
    }

    async fn count(&self, _table: &str, _filters: &[RawFilter]) -> Result<u64, RemoteStoreError> {
        Ok(0)
    }

    async fn insert(&self, _table: &str, _rows: Vec<Value>) -> Result<Vec<Value>, RemoteStoreError> {
        Ok(Vec::new())
    }

    async fn update(
        &self,
        _table: &str,
        _key: &RawFilter,
        _patch: Value,
    ) -> Result<Vec<Value>, RemoteStoreError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _table: &str, _key: &RawFilter) -> Result<(), RemoteStoreError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), RemoteStoreError> {
        Ok(())
    }
}
