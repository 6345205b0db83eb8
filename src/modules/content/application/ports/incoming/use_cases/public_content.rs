use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::content::application::domain::entities::{
    Certificate, Education, Experience, GalleryCategory, GalleryItem, Post, Project, Skill,
};
use crate::modules::remote_store::application::ports::outgoing::RemoteStoreError;
use crate::modules::remote_store::application::services::CollectionState;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListFilter {
    #[serde(default)]
    pub featured: bool,
    pub tag: Option<String>,
    pub limit: Option<u32>,
}

/// Everything the marketing page renders, section by section.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub projects: CollectionState<Project>,
    pub skills: CollectionState<Skill>,
    pub certificates: CollectionState<Certificate>,
    pub experience: CollectionState<Experience>,
    pub education: CollectionState<Education>,
    pub gallery: CollectionState<GalleryItem>,
    pub posts: CollectionState<Post>,
}

/// Printable CV. `auto_print` asks the page to open the print dialog.
#[derive(Debug, Clone, Serialize)]
pub struct CvDocument {
    pub experience: CollectionState<Experience>,
    pub education: CollectionState<Education>,
    pub skills: CollectionState<Skill>,
    pub certificates: CollectionState<Certificate>,
    pub projects: CollectionState<Project>,
    pub auto_print: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentLookupError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<RemoteStoreError> for ContentLookupError {
    fn from(err: RemoteStoreError) -> Self {
        ContentLookupError::QueryFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (public, published-only reads)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PublicContentUseCase: Send + Sync {
    async fn projects(&self, filter: ProjectListFilter) -> CollectionState<Project>;

    /// Drafts are reported as not found.
    async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, ContentLookupError>;

    async fn certificates(&self) -> CollectionState<Certificate>;

    async fn posts(&self) -> CollectionState<Post>;

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentLookupError>;

    async fn gallery(&self, category: Option<GalleryCategory>) -> CollectionState<GalleryItem>;

    async fn experience(&self) -> CollectionState<Experience>;

    async fn education(&self) -> CollectionState<Education>;

    async fn skills(&self) -> CollectionState<Skill>;

    async fn site(&self) -> SiteContent;

    async fn cv(&self, auto_print: bool) -> CvDocument;
}
