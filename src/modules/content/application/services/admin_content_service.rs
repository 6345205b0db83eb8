use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{AdminRecord, ContentValidationError};
use crate::modules::remote_store::application::domain::{Caller, Query, Record};
use crate::modules::remote_store::application::ports::outgoing::RemoteStoreError;
use crate::modules::remote_store::application::services::DataAccess;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminContentError {
    #[error("Record not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(#[from] ContentValidationError),

    #[error("Invalid patch: {0}")]
    InvalidPatch(String),

    #[error("Remote store error: {0}")]
    Store(#[from] RemoteStoreError),
}

// ============================================================================
// Service
// ============================================================================

/// Pass-through editing for every content table. Writes go straight to the
/// store with the caller's credentials; concurrent editors overwrite each
/// other (last write wins).
#[derive(Debug, Clone)]
pub struct AdminContentService {
    access: DataAccess,
}

impl AdminContentService {
    pub fn new(access: DataAccess) -> Self {
        Self { access }
    }

    /// All records, drafts included.
    pub async fn list<R: AdminRecord>(&self, caller: &Caller) -> Result<Vec<R>, AdminContentError> {
        let (column, ascending) = R::admin_order();
        let query = Query::<R>::new().order_by(column, ascending);
        Ok(self.access.for_caller(caller).select(&query).await?)
    }

    pub async fn create<R: AdminRecord>(
        &self,
        caller: &Caller,
        record: R,
    ) -> Result<R, AdminContentError> {
        record.validate()?;

        let mut inserted = self
            .access
            .for_caller(caller)
            .insert(std::slice::from_ref(&record))
            .await?;
        info!(table = R::TABLE, "Record created");

        // The null store echoes nothing back; hand the caller what it sent.
        Ok(if inserted.is_empty() {
            record
        } else {
            inserted.swap_remove(0)
        })
    }

    /// Applies `patch` over the stored record, validates the merged result and
    /// writes only the patch.
    pub async fn update<R: AdminRecord>(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: Value,
    ) -> Result<R, AdminContentError> {
        let Value::Object(fields) = &patch else {
            return Err(AdminContentError::InvalidPatch(
                "patch must be a JSON object".to_string(),
            ));
        };
        if fields.contains_key("id") {
            return Err(AdminContentError::InvalidPatch("id is immutable".to_string()));
        }

        let access = self.access.for_caller(caller);
        let current = access
            .fetch_one::<R, _>(R::key_column(), id)
            .await?
            .ok_or(AdminContentError::NotFound)?;

        let mut merged = serde_json::to_value(&current)
            .map_err(|e| AdminContentError::InvalidPatch(e.to_string()))?;
        if let Value::Object(target) = &mut merged {
            for (k, v) in fields {
                target.insert(k.clone(), v.clone());
            }
        }
        let candidate: R = serde_json::from_value(merged)
            .map_err(|e| AdminContentError::InvalidPatch(e.to_string()))?;
        candidate.validate()?;

        let updated = access
            .update::<R>(id, patch)
            .await?
            .ok_or(AdminContentError::NotFound)?;
        info!(table = R::TABLE, %id, "Record updated");
        Ok(updated)
    }

    pub async fn delete<R: AdminRecord>(
        &self,
        caller: &Caller,
        id: Uuid,
    ) -> Result<(), AdminContentError> {
        self.access.for_caller(caller).delete::<R>(id).await?;
        info!(table = R::TABLE, %id, "Record deleted");
        Ok(())
    }
}
