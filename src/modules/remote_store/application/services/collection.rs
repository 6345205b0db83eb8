use serde::Serialize;
use tracing::warn;

use crate::modules::remote_store::application::domain::query::Query;
use crate::modules::remote_store::application::domain::record::Record;
use crate::modules::remote_store::application::services::data_access::DataAccess;

/// Snapshot of a collection fetch, shaped for rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionState<R> {
    pub data: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R> CollectionState<R> {
    pub fn loading() -> Self {
        Self {
            data: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn ready(data: Vec<R>) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    pub fn map<U>(self, f: impl FnMut(R) -> U) -> CollectionState<U> {
        CollectionState {
            data: self.data.into_iter().map(f).collect(),
            loading: self.loading,
            error: self.error,
        }
    }
}

/// A collection query bound to its current state. `refetch` re-runs the query;
/// a failed refetch keeps the previous data and records the error.
pub struct CollectionResource<R: Record> {
    access: DataAccess,
    query: Query<R>,
    state: CollectionState<R>,
}

impl<R: Record> CollectionResource<R> {
    pub fn new(access: DataAccess, query: Query<R>) -> Self {
        Self {
            access,
            query,
            state: CollectionState::loading(),
        }
    }

    pub async fn refetch(&mut self) {
        self.state.loading = true;

        match self.access.select(&self.query).await {
            Ok(rows) => {
                self.state.data = rows;
                self.state.error = None;
            }
            Err(e) => {
                warn!(table = R::TABLE, error = %e, "Collection fetch failed");
                self.state.error = Some(e.to_string());
            }
        }

        self.state.loading = false;
    }

    pub fn state(&self) -> &CollectionState<R> {
        &self.state
    }

    pub fn data(&self) -> &[R] {
        &self.state.data
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn into_state(self) -> CollectionState<R> {
        self.state
    }
}
