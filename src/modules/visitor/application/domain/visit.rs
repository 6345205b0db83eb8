use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::remote_store::application::domain::record::{Column, Record};

const MAX_PATH: usize = 1024;
const MAX_REFERRER: usize = 2048;

/// One recorded page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub session_id: String,
    /// Path including the query string.
    pub path: String,
    #[serde(default)]
    pub referrer: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// `"{width}x{height}"`
    #[serde(default)]
    pub viewport: Option<String>,
    pub visited_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum VisitorColumn {
    Id,
    SessionId,
    Path,
    VisitedAt,
}

impl Column for VisitorColumn {
    fn name(&self) -> &'static str {
        match self {
            VisitorColumn::Id => "id",
            VisitorColumn::SessionId => "session_id",
            VisitorColumn::Path => "path",
            VisitorColumn::VisitedAt => "visited_at",
        }
    }
}

impl Record for Visitor {
    const TABLE: &'static str = "visitors";
    type Column = VisitorColumn;

    fn key_column() -> VisitorColumn {
        VisitorColumn::Id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A navigation reported by the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct PageVisit {
    pub path: String,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub viewport: Option<Viewport>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VisitValidationError {
    #[error("path cannot be empty")]
    EmptyPath,

    #[error("{field} is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl PageVisit {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            referrer: None,
            user_agent: None,
            viewport: None,
        }
    }

    /// The path ends up in the session marker cookie, so it is bounded
    /// well under the browser cookie limit.
    pub fn validate(&self) -> Result<(), VisitValidationError> {
        if self.path.trim().is_empty() {
            return Err(VisitValidationError::EmptyPath);
        }
        within("path", &self.path, MAX_PATH)?;
        if let Some(referrer) = &self.referrer {
            within("referrer", referrer, MAX_REFERRER)?;
        }
        Ok(())
    }
}

fn within(field: &'static str, value: &str, max: usize) -> Result<(), VisitValidationError> {
    if value.chars().count() > max {
        return Err(VisitValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Session-scoped marker of the last recorded path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTracked {
    pub path: String,
    pub at_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerPolicy {
    /// Repeat visits to the same path inside this window are not recorded.
    pub dedupe_window: Duration,
}

impl Default for TrackerPolicy {
    fn default() -> Self {
        Self {
            dedupe_window: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackOutcome {
    Recorded,
    Deduplicated,
    /// The write failed; the failure was logged and dropped.
    Failed,
}
