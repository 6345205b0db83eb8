use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::modules::remote_store::application::domain::{Caller, Query, Record};
use crate::modules::remote_store::application::ports::outgoing::RemoteStoreError;
use crate::modules::remote_store::application::services::DataAccess;
use crate::modules::seed::application::domain::{NaturalKey, SampleContent};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedError {
    #[error("Remote store is not configured")]
    NotConfigured,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub category: &'static str,
    pub inserted: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedReport {
    pub categories: Vec<CategoryReport>,
}

/// Rows read per request while collecting existing keys. Stores may cap a
/// page below this; the scan stops on the first empty page.
const KEY_PAGE_SIZE: u32 = 1000;

impl SeedReport {
    pub fn inserted(&self) -> usize {
        self.categories.iter().map(|c| c.inserted).sum()
    }
}

/// Copies the sample content into the store, skipping anything whose natural
/// key is already present. Safe to run repeatedly.
#[derive(Clone)]
pub struct SeedSync {
    access: DataAccess,
    content: SampleContent,
}

impl std::fmt::Debug for SeedSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedSync").finish_non_exhaustive()
    }
}

impl SeedSync {
    pub fn new(access: DataAccess, content: SampleContent) -> Self {
        Self { access, content }
    }

    pub async fn run(&self, caller: &Caller) -> Result<SeedReport, SeedError> {
        if !self.access.is_configured() {
            return Err(SeedError::NotConfigured);
        }

        let access = self.access.for_caller(caller);
        let content = &self.content;
        let categories = vec![
            sync_category(&access, "projects", &content.projects).await,
            sync_category(&access, "certificates", &content.certificates).await,
            sync_category(&access, "gallery", &content.gallery).await,
            sync_category(&access, "experience", &content.experience).await,
            sync_category(&access, "education", &content.education).await,
            sync_category(&access, "skills", &content.skills).await,
        ];

        let report = SeedReport { categories };
        info!(inserted = report.inserted(), "Seed sync finished");
        Ok(report)
    }
}

async fn sync_category<R>(
    access: &DataAccess,
    category: &'static str,
    samples: &[R],
) -> CategoryReport
where
    R: Record + NaturalKey + Clone,
{
    let mut seen = match existing_keys::<R>(access).await {
        Ok(keys) => keys,
        Err(e) => {
            warn!(category, error = %e, "Could not read existing rows, skipping category");
            return CategoryReport {
                category,
                inserted: 0,
                skipped: samples.len(),
                error: Some(e.to_string()),
            };
        }
    };

    let missing: Vec<R> = samples
        .iter()
        .filter(|r| seen.insert(r.natural_key()))
        .cloned()
        .collect();
    let skipped = samples.len() - missing.len();

    if missing.is_empty() {
        return CategoryReport {
            category,
            inserted: 0,
            skipped,
            error: None,
        };
    }

    match access.insert(&missing).await {
        Ok(rows) => {
            info!(category, inserted = rows.len(), skipped, "Seeded category");
            CategoryReport {
                category,
                inserted: rows.len(),
                skipped,
                error: None,
            }
        }
        Err(e) => {
            warn!(category, error = %e, "Seed insert failed");
            CategoryReport {
                category,
                inserted: 0,
                skipped,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Natural keys of every stored row, read page by page with only the key
/// columns selected. Rows without a usable key are left out.
async fn existing_keys<R>(access: &DataAccess) -> Result<HashSet<String>, RemoteStoreError>
where
    R: Record + NaturalKey,
{
    let mut keys = HashSet::new();
    let mut offset = 0u32;

    loop {
        let page = Query::<R>::new()
            .select(R::KEY_COLUMNS.join(","))
            .order_by(R::key_column(), true)
            .limit(KEY_PAGE_SIZE)
            .offset(offset);
        let rows = access.select_rows(&page).await?;
        if rows.is_empty() {
            return Ok(keys);
        }

        offset += rows.len() as u32;
        for row in &rows {
            match R::row_key(row) {
                Some(key) => {
                    keys.insert(key);
                }
                None => debug!(table = R::TABLE, "Stored row has no usable natural key"),
            }
        }
    }
}
