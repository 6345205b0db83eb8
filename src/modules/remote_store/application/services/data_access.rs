use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::modules::remote_store::application::domain::caller::Caller;
use crate::modules::remote_store::application::domain::query::{Query, RawFilter};
use crate::modules::remote_store::application::domain::record::{Column, Record};
use crate::modules::remote_store::application::ports::outgoing::remote_store::{
    RemoteStore, RemoteStoreError,
};
use crate::modules::remote_store::application::services::collection::CollectionResource;

/// Typed access to the hosted table store.
///
/// Reads decode rows into `Record` types; writes are pass-through calls.
/// With the null store behind it every operation succeeds with empty results.
#[derive(Clone)]
pub struct DataAccess {
    store: Arc<dyn RemoteStore>,
}

impl fmt::Debug for DataAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataAccess")
            .field("store", &"<dyn RemoteStore>")
            .field("configured", &self.store.is_configured())
            .finish()
    }
}

impl DataAccess {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self { store }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_configured()
    }

    /// Access whose calls carry `caller`'s credentials.
    pub fn for_caller(&self, caller: &Caller) -> DataAccess {
        match caller.access_token() {
            Some(token) => DataAccess::new(self.store.as_user(token)),
            None => self.clone(),
        }
    }

    pub async fn ping(&self) -> Result<(), RemoteStoreError> {
        self.store.ping().await
    }

    /// Fetch a collection into a resource carrying `{data, loading, error}`.
    /// Never fails: errors are stored on the resource.
    pub async fn fetch_collection<R: Record>(&self, query: Query<R>) -> CollectionResource<R> {
        let mut resource = CollectionResource::new(self.clone(), query);
        resource.refetch().await;
        resource
    }

    pub async fn select<R: Record>(&self, query: &Query<R>) -> Result<Vec<R>, RemoteStoreError> {
        let rows = self.store.select(R::TABLE, query.raw()).await?;
        decode_rows(rows)
    }

    /// Undecoded rows, for callers that only read a few columns.
    pub async fn select_rows<R: Record>(
        &self,
        query: &Query<R>,
    ) -> Result<Vec<Value>, RemoteStoreError> {
        self.store.select(R::TABLE, query.raw()).await
    }

    /// `Ok(None)` when nothing matches; `Err` only for transport/decode failures.
    pub async fn fetch_one<R: Record, V: Serialize>(
        &self,
        column: R::Column,
        value: V,
    ) -> Result<Option<R>, RemoteStoreError> {
        let query = Query::<R>::new().eq(column, value).limit(1);
        let mut rows = self.select(&query).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    pub async fn count<R: Record>(&self, query: &Query<R>) -> Result<u64, RemoteStoreError> {
        self.store.count(R::TABLE, &query.raw().filters).await
    }

    pub async fn insert<R: Record>(&self, records: &[R]) -> Result<Vec<R>, RemoteStoreError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let rows = records
            .iter()
            .map(|r| serde_json::to_value(r).map_err(|e| RemoteStoreError::Decode(e.to_string())))
            .collect::<Result<Vec<Value>, _>>()?;

        let inserted = self.store.insert(R::TABLE, rows).await?;
        decode_rows(inserted)
    }

    /// Last write wins: no version check is made.
    pub async fn update<R: Record>(
        &self,
        id: Uuid,
        patch: Value,
    ) -> Result<Option<R>, RemoteStoreError> {
        let key = key_filter::<R>(id);
        let mut rows = decode_rows::<R>(self.store.update(R::TABLE, &key, patch).await?)?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    pub async fn delete<R: Record>(&self, id: Uuid) -> Result<(), RemoteStoreError> {
        self.store.delete(R::TABLE, &key_filter::<R>(id)).await
    }
}

fn key_filter<R: Record>(id: Uuid) -> RawFilter {
    RawFilter::new(R::key_column().name(), Value::String(id.to_string()))
}

fn decode_rows<R: Record>(rows: Vec<Value>) -> Result<Vec<R>, RemoteStoreError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| RemoteStoreError::Decode(e.to_string())))
        .collect()
}
