// src/modules/remote_store/adapter/outgoing/memory_store.rs

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::modules::remote_store::application::domain::query::{RawFilter, RawOrder, RawQuery};
use crate::modules::remote_store::application::ports::outgoing::remote_store::{
    RemoteStore, RemoteStoreError,
};

#[derive(Debug, Default)]
struct Tables {
    rows: HashMap<String, Vec<Value>>,
    insert_calls: HashMap<String, usize>,
    /// Bearer of every write, per table, in call order.
    write_bearers: HashMap<String, Vec<Option<String>>>,
    unavailable: bool,
}

/// Process-local table store with the same query semantics as the hosted one.
/// Backs the offline mode and the test suite.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRemoteStore {
    inner: Arc<Mutex<Tables>>,
    bearer: Option<String>,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// When set, every operation fails with a transport error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.lock().rows.get(table).cloned().unwrap_or_default()
    }

    /// Number of insert calls that reached `table`.
    pub fn insert_calls(&self, table: &str) -> usize {
        self.lock().insert_calls.get(table).copied().unwrap_or(0)
    }

    /// Access token carried by each write to `table`; `None` for anonymous writes.
    pub fn write_bearers(&self, table: &str) -> Vec<Option<String>> {
        self.lock().write_bearers.get(table).cloned().unwrap_or_default()
    }

    fn record_write(&self, tables: &mut Tables, table: &str) {
        tables
            .write_bearers
            .entry(table.to_string())
            .or_default()
            .push(self.bearer.clone());
    }

    fn check_available(tables: &Tables) -> Result<(), RemoteStoreError> {
        if tables.unavailable {
            return Err(RemoteStoreError::Transport(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    fn is_configured(&self) -> bool {
        true
    }

    fn as_user(&self, access_token: &str) -> Arc<dyn RemoteStore> {
        Arc::new(Self {
            inner: Arc::clone(&self.inner),
            bearer: Some(access_token.to_string()),
        })
    }

    async fn select(&self, table: &str, query: &RawQuery) -> Result<Vec<Value>, RemoteStoreError> {
        let tables = self.lock();
        Self::check_available(&tables)?;

        let mut rows: Vec<Value> = tables
            .rows
            .get(table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
            .unwrap_or_default();

        if let Some(order) = &query.order {
            sort_rows(&mut rows, order);
        }

        if let Some(offset) = query.offset {
            rows.drain(..rows.len().min(offset as usize));
        }

        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }

        if let Some(projection) = query.select.as_deref() {
            rows = rows.into_iter().map(|r| project(r, projection)).collect();
        }

        Ok(rows)
    }

    async fn count(&self, table: &str, filters: &[RawFilter]) -> Result<u64, RemoteStoreError> {
        let tables = self.lock();
        Self::check_available(&tables)?;

        let count = tables
            .rows
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|r| filters.iter().all(|f| f.matches(r)))
                    .count()
            })
            .unwrap_or(0);

        Ok(count as u64)
    }

    async fn insert(&self, table: &str, rows: Vec<Value>) -> Result<Vec<Value>, RemoteStoreError> {
        let mut tables = self.lock();
        Self::check_available(&tables)?;

        // Validate the whole batch before storing anything.
        let mut prepared = Vec::with_capacity(rows.len());
        for row in rows {
            let Value::Object(mut fields) = row else {
                return Err(RemoteStoreError::Api {
                    status: 400,
                    message: "row must be a JSON object".to_string(),
                });
            };

            if fields.get("id").map_or(true, Value::is_null) {
                fields.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
            }
            if fields.get("created_at").map_or(true, Value::is_null) {
                fields.insert(
                    "created_at".to_string(),
                    Value::String(Utc::now().to_rfc3339()),
                );
            }
            prepared.push(Value::Object(fields));
        }

        *tables.insert_calls.entry(table.to_string()).or_insert(0) += 1;
        self.record_write(&mut tables, table);
        tables
            .rows
            .entry(table.to_string())
            .or_default()
            .extend(prepared.iter().cloned());

        Ok(prepared)
    }

    async fn update(
        &self,
        table: &str,
        key: &RawFilter,
        patch: Value,
    ) -> Result<Vec<Value>, RemoteStoreError> {
        let mut tables = self.lock();
        Self::check_available(&tables)?;

        let Value::Object(patch) = patch else {
            return Err(RemoteStoreError::Api {
                status: 400,
                message: "patch must be a JSON object".to_string(),
            });
        };

        self.record_write(&mut tables, table);
        let mut updated = Vec::new();
        if let Some(rows) = tables.rows.get_mut(table) {
            for row in rows.iter_mut().filter(|r| key.matches(r)) {
                if let Value::Object(fields) = row {
                    merge(fields, &patch);
                }
                updated.push(row.clone());
            }
        }

        Ok(updated)
    }

    async fn delete(&self, table: &str, key: &RawFilter) -> Result<(), RemoteStoreError> {
        let mut tables = self.lock();
        Self::check_available(&tables)?;

        self.record_write(&mut tables, table);
        if let Some(rows) = tables.rows.get_mut(table) {
            rows.retain(|r| !key.matches(r));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RemoteStoreError> {
        Self::check_available(&self.lock())
    }
}

fn merge(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (k, v) in patch {
        target.insert(k.clone(), v.clone());
    }
}

fn project(row: Value, projection: &str) -> Value {
    let projection = projection.trim();
    if projection.is_empty() || projection == "*" {
        return row;
    }

    let Value::Object(fields) = row else {
        return row;
    };

    let wanted: Vec<&str> = projection.split(',').map(str::trim).collect();
    Value::Object(
        fields
            .into_iter()
            .filter(|(k, _)| wanted.contains(&k.as_str()))
            .collect(),
    )
}

/// Nulls sort last in both directions.
fn sort_rows(rows: &mut [Value], order: &RawOrder) {
    rows.sort_by(|a, b| {
        let left = a.get(&order.column).filter(|v| !v.is_null());
        let right = b.get(&order.column).filter(|v| !v.is_null());

        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(l), Some(r)) => {
                let ord = compare_values(l, r);
                if order.ascending {
                    ord
                } else {
                    ord.reverse()
                }
            }
        }
    });
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => {
            let l = l.as_f64().unwrap_or(0.0);
            let r = r.as_f64().unwrap_or(0.0);
            l.partial_cmp(&r).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        (Value::String(l), Value::String(r)) => {
            match (
                DateTime::parse_from_rfc3339(l),
                DateTime::parse_from_rfc3339(r),
            ) {
                (Ok(l), Ok(r)) => l.cmp(&r),
                _ => l.cmp(r),
            }
        }
        _ => left.to_string().cmp(&right.to_string()),
    }
}
