use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::remote_store::application::domain::record::{Column, Record};

//
// ──────────────────────────────────────────────────────────
// Shared enums
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Profile,
    Event,
    Speaking,
    Project,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
    Cloud,
    Database,
    Soft,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Framework => "framework",
            SkillCategory::Tool => "tool",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Database => "database",
            SkillCategory::Soft => "soft",
            SkillCategory::Other => "other",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Editorial traits
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Slug '{0}' must be lowercase letters, digits and single dashes")]
    InvalidSlug(String),

    #[error("Skill level {0} is outside 0..=100")]
    LevelOutOfRange(u8),

    #[error("End date is before start date")]
    EndBeforeStart,
}

/// Records with a draft/published workflow.
pub trait Publishable {
    fn status(&self) -> ContentStatus;

    fn is_published(&self) -> bool {
        self.status() == ContentStatus::Published
    }
}

/// Records editable from the admin surface.
pub trait AdminRecord: Record {
    /// Ordering used by admin listings.
    fn admin_order() -> (Self::Column, bool);

    fn validate(&self) -> Result<(), ContentValidationError>;
}

pub fn validate_slug(slug: &str) -> Result<(), ContentValidationError> {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    let pattern =
        SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug pattern"));

    if pattern.is_match(slug) {
        Ok(())
    } else {
        Err(ContentValidationError::InvalidSlug(slug.to_string()))
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ContentValidationError> {
    if value.trim().is_empty() {
        Err(ContentValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn check_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), ContentValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(ContentValidationError::EndBeforeStart),
        _ => Ok(()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    /// Unique per table; enforced by the store.
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub approach: Option<String>,
    #[serde(default)]
    pub outcomes: Option<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum ProjectColumn {
    Id,
    Slug,
    Status,
    Featured,
    StartDate,
    CreatedAt,
}

impl Column for ProjectColumn {
    fn name(&self) -> &'static str {
        match self {
            ProjectColumn::Id => "id",
            ProjectColumn::Slug => "slug",
            ProjectColumn::Status => "status",
            ProjectColumn::Featured => "featured",
            ProjectColumn::StartDate => "start_date",
            ProjectColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for Project {
    const TABLE: &'static str = "projects";
    type Column = ProjectColumn;

    fn key_column() -> ProjectColumn {
        ProjectColumn::Id
    }
}

impl Publishable for Project {
    fn status(&self) -> ContentStatus {
        self.status
    }
}

impl AdminRecord for Project {
    fn admin_order() -> (ProjectColumn, bool) {
        (ProjectColumn::CreatedAt, false)
    }

    fn validate(&self) -> Result<(), ContentValidationError> {
        require("title", &self.title)?;
        validate_slug(&self.slug)?;
        check_range(self.start_date, self.end_date)
    }
}

//
// ──────────────────────────────────────────────────────────
// Certificate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub verification_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum CertificateColumn {
    Id,
    Title,
    Issuer,
    IssueDate,
    Status,
    CreatedAt,
}

impl Column for CertificateColumn {
    fn name(&self) -> &'static str {
        match self {
            CertificateColumn::Id => "id",
            CertificateColumn::Title => "title",
            CertificateColumn::Issuer => "issuer",
            CertificateColumn::IssueDate => "issue_date",
            CertificateColumn::Status => "status",
            CertificateColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for Certificate {
    const TABLE: &'static str = "certificates";
    type Column = CertificateColumn;

    fn key_column() -> CertificateColumn {
        CertificateColumn::Id
    }
}

impl Publishable for Certificate {
    fn status(&self) -> ContentStatus {
        self.status
    }
}

impl AdminRecord for Certificate {
    fn admin_order() -> (CertificateColumn, bool) {
        (CertificateColumn::IssueDate, false)
    }

    fn validate(&self) -> Result<(), ContentValidationError> {
        require("title", &self.title)?;
        require("issuer", &self.issuer)?;
        check_range(Some(self.issue_date), self.expiry_date)
    }
}

//
// ──────────────────────────────────────────────────────────
// Post
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum PostColumn {
    Id,
    Slug,
    Status,
    PublishedAt,
    CreatedAt,
}

impl Column for PostColumn {
    fn name(&self) -> &'static str {
        match self {
            PostColumn::Id => "id",
            PostColumn::Slug => "slug",
            PostColumn::Status => "status",
            PostColumn::PublishedAt => "published_at",
            PostColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for Post {
    const TABLE: &'static str = "posts";
    type Column = PostColumn;

    fn key_column() -> PostColumn {
        PostColumn::Id
    }
}

impl Publishable for Post {
    fn status(&self) -> ContentStatus {
        self.status
    }
}

impl AdminRecord for Post {
    fn admin_order() -> (PostColumn, bool) {
        (PostColumn::CreatedAt, false)
    }

    fn validate(&self) -> Result<(), ContentValidationError> {
        require("title", &self.title)?;
        validate_slug(&self.slug)
    }
}

//
// ──────────────────────────────────────────────────────────
// GalleryItem
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub media_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    pub category: GalleryCategory,
    #[serde(default)]
    pub order_index: u16,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum GalleryColumn {
    Id,
    MediaUrl,
    Category,
    OrderIndex,
    Status,
    CreatedAt,
}

impl Column for GalleryColumn {
    fn name(&self) -> &'static str {
        match self {
            GalleryColumn::Id => "id",
            GalleryColumn::MediaUrl => "media_url",
            GalleryColumn::Category => "category",
            GalleryColumn::OrderIndex => "order_index",
            GalleryColumn::Status => "status",
            GalleryColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for GalleryItem {
    const TABLE: &'static str = "gallery_items";
    type Column = GalleryColumn;

    fn key_column() -> GalleryColumn {
        GalleryColumn::Id
    }
}

impl Publishable for GalleryItem {
    fn status(&self) -> ContentStatus {
        self.status
    }
}

impl AdminRecord for GalleryItem {
    fn admin_order() -> (GalleryColumn, bool) {
        (GalleryColumn::OrderIndex, true)
    }

    fn validate(&self) -> Result<(), ContentValidationError> {
        require("media_url", &self.media_url)
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience / Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub organization: String,
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order_index: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum ExperienceColumn {
    Id,
    Organization,
    StartDate,
    OrderIndex,
    CreatedAt,
}

impl Column for ExperienceColumn {
    fn name(&self) -> &'static str {
        match self {
            ExperienceColumn::Id => "id",
            ExperienceColumn::Organization => "organization",
            ExperienceColumn::StartDate => "start_date",
            ExperienceColumn::OrderIndex => "order_index",
            ExperienceColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for Experience {
    const TABLE: &'static str = "experiences";
    type Column = ExperienceColumn;

    fn key_column() -> ExperienceColumn {
        ExperienceColumn::Id
    }
}

impl AdminRecord for Experience {
    fn admin_order() -> (ExperienceColumn, bool) {
        (ExperienceColumn::OrderIndex, true)
    }

    fn validate(&self) -> Result<(), ContentValidationError> {
        require("organization", &self.organization)?;
        require("title", &self.title)?;
        check_range(Some(self.start_date), self.end_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub school: String,
    pub program: String,
    #[serde(default)]
    pub degree: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub order_index: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum EducationColumn {
    Id,
    School,
    StartDate,
    OrderIndex,
    CreatedAt,
}

impl Column for EducationColumn {
    fn name(&self) -> &'static str {
        match self {
            EducationColumn::Id => "id",
            EducationColumn::School => "school",
            EducationColumn::StartDate => "start_date",
            EducationColumn::OrderIndex => "order_index",
            EducationColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for Education {
    const TABLE: &'static str = "education";
    type Column = EducationColumn;

    fn key_column() -> EducationColumn {
        EducationColumn::Id
    }
}

impl AdminRecord for Education {
    fn admin_order() -> (EducationColumn, bool) {
        (EducationColumn::OrderIndex, true)
    }

    fn validate(&self) -> Result<(), ContentValidationError> {
        require("school", &self.school)?;
        require("program", &self.program)?;
        check_range(Some(self.start_date), self.end_date)
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub category: SkillCategory,
    /// Proficiency, 0..=100.
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub order_index: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy)]
pub enum SkillColumn {
    Id,
    Name,
    Category,
    OrderIndex,
    CreatedAt,
}

impl Column for SkillColumn {
    fn name(&self) -> &'static str {
        match self {
            SkillColumn::Id => "id",
            SkillColumn::Name => "name",
            SkillColumn::Category => "category",
            SkillColumn::OrderIndex => "order_index",
            SkillColumn::CreatedAt => "created_at",
        }
    }
}

impl Record for Skill {
    const TABLE: &'static str = "skills";
    type Column = SkillColumn;

    fn key_column() -> SkillColumn {
        SkillColumn::Id
    }
}

impl AdminRecord for Skill {
    fn admin_order() -> (SkillColumn, bool) {
        (SkillColumn::OrderIndex, true)
    }

    fn validate(&self) -> Result<(), ContentValidationError> {
        require("name", &self.name)?;
        match self.level {
            Some(level) if level > 100 => Err(ContentValidationError::LevelOutOfRange(level)),
            _ => Ok(()),
        }
    }
}
