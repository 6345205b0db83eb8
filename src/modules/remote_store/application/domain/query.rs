use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use super::record::{Column, Record};

//
// ──────────────────────────────────────────────────────────
// Untyped wire form (what the port receives)
// ──────────────────────────────────────────────────────────
//

/// Equality test on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFilter {
    pub column: String,
    pub value: Value,
}

impl RawFilter {
    pub fn new(column: impl Into<String>, value: Value) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }

    /// A missing field only matches a `null` filter value.
    pub fn matches(&self, row: &Value) -> bool {
        match row.get(&self.column) {
            Some(found) => found == &self.value,
            None => self.value.is_null(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawOrder {
    pub column: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQuery {
    pub select: Option<String>,
    pub filters: Vec<RawFilter>,
    pub order: Option<RawOrder>,
    pub limit: Option<u32>,
    /// Rows to skip before `limit` applies.
    pub offset: Option<u32>,
}

impl RawQuery {
    pub fn matches(&self, row: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }
}

//
// ──────────────────────────────────────────────────────────
// Typed query
// ──────────────────────────────────────────────────────────
//

/// Declarative collection query over one entity's table.
///
/// Filters are AND-combined equality tests. A single ordering column, a
/// row limit and an offset are optional.
pub struct Query<R: Record> {
    raw: RawQuery,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Query<R> {
    pub fn new() -> Self {
        Self {
            raw: RawQuery::default(),
            _record: PhantomData,
        }
    }

    /// Projection string passed through to the store (`*` when unset).
    pub fn select(mut self, projection: impl Into<String>) -> Self {
        self.raw.select = Some(projection.into());
        self
    }

    pub fn eq<V: Serialize>(mut self, column: R::Column, value: V) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.raw.filters.push(RawFilter::new(column.name(), value));
        self
    }

    pub fn order_by(mut self, column: R::Column, ascending: bool) -> Self {
        self.raw.order = Some(RawOrder {
            column: column.name().to_string(),
            ascending,
        });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.raw.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.raw.offset = Some(offset);
        self
    }

    pub fn raw(&self) -> &RawQuery {
        &self.raw
    }

    pub fn table(&self) -> &'static str {
        R::TABLE
    }
}

impl<R: Record> Default for Query<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Clone for Query<R> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> std::fmt::Debug for Query<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("table", &R::TABLE)
            .field("raw", &self.raw)
            .finish()
    }
}
