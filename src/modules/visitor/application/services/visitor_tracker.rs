use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::modules::client_state::application::domain::keys::{
    VISITOR_LAST_TRACKED, VISITOR_SESSION_ID,
};
use crate::modules::client_state::application::ports::outgoing::{ClientStorage, StorageScope};
use crate::modules::remote_store::application::domain::{Caller, Query};
use crate::modules::remote_store::application::ports::outgoing::RemoteStoreError;
use crate::modules::remote_store::application::services::DataAccess;
use crate::modules::visitor::application::domain::{
    LastTracked, PageVisit, SessionIdGenerator, TrackOutcome, TrackerPolicy, Visitor,
    VisitorColumn,
};
use crate::shared::clock::Clock;

/// Attributes page views to an anonymous per-browser session and records
/// at most one visit per path within the dedupe window.
#[derive(Clone)]
pub struct VisitorTracker {
    access: DataAccess,
    clock: Arc<dyn Clock>,
    policy: TrackerPolicy,
    ids: SessionIdGenerator,
}

impl std::fmt::Debug for VisitorTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitorTracker")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl VisitorTracker {
    pub fn new(access: DataAccess, clock: Arc<dyn Clock>, policy: TrackerPolicy) -> Self {
        Self {
            access,
            clock,
            policy,
            ids: SessionIdGenerator,
        }
    }

    /// The browser's session id, created and persisted on first use.
    pub fn session_id(&self, storage: &dyn ClientStorage) -> String {
        if let Some(existing) = storage
            .get(StorageScope::Durable, VISITOR_SESSION_ID)
            .filter(|id| !id.trim().is_empty())
        {
            return existing;
        }

        let id = self.ids.generate();
        storage.set(StorageScope::Durable, VISITOR_SESSION_ID, &id);
        debug!(session_id = %id, "New visitor session");
        id
    }

    /// Runs the dedupe check and, when the visit should be recorded, writes the
    /// marker right away and returns the record to store.
    pub fn prepare(&self, storage: &dyn ClientStorage, visit: PageVisit) -> Option<Visitor> {
        let now = self.clock.now();
        let now_ms = now.timestamp_millis();

        if let Some(last) = storage
            .get(StorageScope::Session, VISITOR_LAST_TRACKED)
            .and_then(|raw| serde_json::from_str::<LastTracked>(&raw).ok())
        {
            let window_ms = i64::try_from(self.policy.dedupe_window.as_millis()).unwrap_or(i64::MAX);
            let elapsed = now_ms - last.at_ms;
            if last.path == visit.path && (0..window_ms).contains(&elapsed) {
                debug!(path = %visit.path, elapsed_ms = elapsed, "Visit deduplicated");
                return None;
            }
        }

        let marker = LastTracked {
            path: visit.path.clone(),
            at_ms: now_ms,
        };
        match serde_json::to_string(&marker) {
            Ok(raw) => storage.set(StorageScope::Session, VISITOR_LAST_TRACKED, &raw),
            Err(e) => warn!(error = %e, "Failed to write visit marker"),
        }

        Some(Visitor {
            id: None,
            session_id: self.session_id(storage),
            path: visit.path,
            referrer: visit.referrer.filter(|r| !r.trim().is_empty()),
            user_agent: visit.user_agent.filter(|ua| !ua.trim().is_empty()),
            viewport: visit.viewport.map(|v| v.to_string()),
            visited_at: now,
            created_at: None,
        })
    }

    /// Stores a prepared visit. Failures are logged and never returned.
    pub async fn record(&self, visitor: Visitor) -> TrackOutcome {
        match self.access.insert(std::slice::from_ref(&visitor)).await {
            Ok(_) => {
                info!(path = %visitor.path, "Visit recorded");
                TrackOutcome::Recorded
            }
            Err(e) => {
                warn!(path = %visitor.path, error = %e, "Failed to record visit");
                TrackOutcome::Failed
            }
        }
    }

    pub async fn track(&self, storage: &dyn ClientStorage, visit: PageVisit) -> TrackOutcome {
        match self.prepare(storage, visit) {
            Some(visitor) => self.record(visitor).await,
            None => TrackOutcome::Deduplicated,
        }
    }

    /// Most recent visits first.
    pub async fn recent(
        &self,
        caller: &Caller,
        limit: u32,
    ) -> Result<Vec<Visitor>, RemoteStoreError> {
        let query = Query::<Visitor>::new()
            .order_by(VisitorColumn::VisitedAt, false)
            .limit(limit);
        self.access.for_caller(caller).select(&query).await
    }
}
