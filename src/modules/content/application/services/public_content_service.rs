use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{
    Certificate, CertificateColumn, ContentStatus, Education, EducationColumn, Experience,
    ExperienceColumn, GalleryCategory, GalleryColumn, GalleryItem, Post, PostColumn, Project,
    ProjectColumn, Publishable, Skill, SkillColumn,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentLookupError, CvDocument, ProjectListFilter, PublicContentUseCase, SiteContent,
};
use crate::modules::remote_store::application::domain::{Query, Record};
use crate::modules::remote_store::application::services::{CollectionState, DataAccess};

/// Number of featured projects shown on the CV.
const CV_PROJECT_LIMIT: u32 = 6;

// ============================================================================
// Service Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct PublicContentService {
    access: DataAccess,
}

impl PublicContentService {
    pub fn new(access: DataAccess) -> Self {
        Self { access }
    }

    async fn published<R>(&self, query: Query<R>) -> CollectionState<R>
    where
        R: Record + Publishable,
    {
        let mut state = self.access.fetch_collection(query).await.into_state();
        state.data.retain(|r| r.is_published());
        state
    }

    async fn published_one<R>(
        &self,
        column: R::Column,
        slug: &str,
    ) -> Result<Option<R>, ContentLookupError>
    where
        R: Record + Publishable,
    {
        let found = self
            .access
            .fetch_one::<R, _>(column, slug.trim().to_lowercase())
            .await?;
        Ok(found.filter(|r| r.is_published()))
    }
}

#[async_trait]
impl PublicContentUseCase for PublicContentService {
    async fn projects(&self, filter: ProjectListFilter) -> CollectionState<Project> {
        let mut query = Query::<Project>::new()
            .eq(ProjectColumn::Status, ContentStatus::Published)
            .order_by(ProjectColumn::CreatedAt, false);
        if filter.featured {
            query = query.eq(ProjectColumn::Featured, true);
        }
        // Tag filtering happens after the fetch, so the limit must too.
        if filter.tag.is_none() {
            if let Some(limit) = filter.limit {
                query = query.limit(limit);
            }
        }

        let mut state = self.published(query).await;

        if let Some(tag) = filter.tag.as_deref() {
            state.data.retain(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)));
            if let Some(limit) = filter.limit {
                state.data.truncate(limit as usize);
            }
        }

        state
    }

    async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, ContentLookupError> {
        self.published_one::<Project>(ProjectColumn::Slug, slug).await
    }

    async fn certificates(&self) -> CollectionState<Certificate> {
        self.published(
            Query::<Certificate>::new()
                .eq(CertificateColumn::Status, ContentStatus::Published)
                .order_by(CertificateColumn::IssueDate, false),
        )
        .await
    }

    async fn posts(&self) -> CollectionState<Post> {
        self.published(
            Query::<Post>::new()
                .eq(PostColumn::Status, ContentStatus::Published)
                .order_by(PostColumn::PublishedAt, false),
        )
        .await
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentLookupError> {
        self.published_one::<Post>(PostColumn::Slug, slug).await
    }

    async fn gallery(&self, category: Option<GalleryCategory>) -> CollectionState<GalleryItem> {
        let mut query = Query::<GalleryItem>::new()
            .eq(GalleryColumn::Status, ContentStatus::Published)
            .order_by(GalleryColumn::OrderIndex, true);
        if let Some(category) = category {
            query = query.eq(GalleryColumn::Category, category);
        }
        self.published(query).await
    }

    async fn experience(&self) -> CollectionState<Experience> {
        self.access
            .fetch_collection(Query::<Experience>::new().order_by(ExperienceColumn::OrderIndex, true))
            .await
            .into_state()
    }

    async fn education(&self) -> CollectionState<Education> {
        self.access
            .fetch_collection(Query::<Education>::new().order_by(EducationColumn::OrderIndex, true))
            .await
            .into_state()
    }

    async fn skills(&self) -> CollectionState<Skill> {
        self.access
            .fetch_collection(Query::<Skill>::new().order_by(SkillColumn::OrderIndex, true))
            .await
            .into_state()
    }

    async fn site(&self) -> SiteContent {
        let (projects, skills, certificates, experience, education, gallery, posts) = futures::join!(
            self.projects(ProjectListFilter::default()),
            self.skills(),
            self.certificates(),
            self.experience(),
            self.education(),
            self.gallery(None),
            self.posts(),
        );

        SiteContent {
            projects,
            skills,
            certificates,
            experience,
            education,
            gallery,
            posts,
        }
    }

    async fn cv(&self, auto_print: bool) -> CvDocument {
        let featured = ProjectListFilter {
            featured: true,
            tag: None,
            limit: Some(CV_PROJECT_LIMIT),
        };

        let (experience, education, skills, certificates, projects) = futures::join!(
            self.experience(),
            self.education(),
            self.skills(),
            self.certificates(),
            self.projects(featured),
        );

        CvDocument {
            experience,
            education,
            skills,
            certificates,
            projects,
            auto_print,
        }
    }
}
