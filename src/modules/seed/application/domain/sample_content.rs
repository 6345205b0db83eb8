use chrono::NaiveDate;

use crate::modules::content::application::domain::entities::{
    Certificate, ContentStatus, Education, Experience, GalleryCategory, GalleryItem, Project,
    Skill, SkillCategory,
};

/// Starter content used to populate an empty backend.
#[derive(Debug, Clone, Default)]
pub struct SampleContent {
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub gallery: Vec<GalleryItem>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SampleContent {
    pub fn default_portfolio() -> Self {
        Self {
            projects: vec![
                project(
                    "Log Pipeline",
                    "log-pipeline",
                    "Streaming log ingestion with back-pressure and replay.",
                    &["Rust", "Kafka", "ClickHouse"],
                    &["data", "backend"],
                    true,
                    date(2023, 2, 1),
                ),
                project(
                    "Portfolio Site",
                    "portfolio-site",
                    "This site: public portfolio with an admin surface.",
                    &["Rust", "actix-web", "PostgreSQL"],
                    &["web"],
                    true,
                    date(2024, 1, 15),
                ),
                project(
                    "Feature Flags",
                    "feature-flags",
                    "Self-hosted feature flag service with percentage rollouts.",
                    &["Go", "Redis"],
                    &["backend", "tooling"],
                    false,
                    date(2021, 9, 1),
                ),
            ],
            certificates: vec![
                Certificate {
                    id: None,
                    title: "Certified Kubernetes Application Developer".into(),
                    issuer: "CNCF".into(),
                    issue_date: date(2022, 11, 3),
                    expiry_date: Some(date(2025, 11, 3)),
                    verification_url: None,
                    tags: strings(&["kubernetes", "cloud"]),
                    status: ContentStatus::Published,
                    created_at: None,
                },
                Certificate {
                    id: None,
                    title: "AWS Certified Solutions Architect - Associate".into(),
                    issuer: "Amazon Web Services".into(),
                    issue_date: date(2021, 4, 20),
                    expiry_date: Some(date(2024, 4, 20)),
                    verification_url: None,
                    tags: strings(&["aws", "cloud"]),
                    status: ContentStatus::Published,
                    created_at: None,
                },
            ],
            gallery: vec![
                gallery("/images/gallery/profile.jpg", "Profile", GalleryCategory::Profile, 1),
                gallery(
                    "/images/gallery/rustconf-talk.jpg",
                    "Talk on async Rust",
                    GalleryCategory::Speaking,
                    2,
                ),
                gallery("/images/gallery/hackathon.jpg", "Hackathon", GalleryCategory::Event, 3),
            ],
            experience: vec![
                Experience {
                    id: None,
                    organization: "Northwind Systems".into(),
                    title: "Senior Backend Engineer".into(),
                    start_date: date(2022, 3, 1),
                    end_date: None,
                    current: true,
                    description: "Platform services and data pipelines.".into(),
                    order_index: 1,
                    created_at: None,
                },
                Experience {
                    id: None,
                    organization: "Contoso Labs".into(),
                    title: "Software Engineer".into(),
                    start_date: date(2018, 7, 1),
                    end_date: Some(date(2022, 2, 28)),
                    current: false,
                    description: "APIs, billing and internal tooling.".into(),
                    order_index: 2,
                    created_at: None,
                },
            ],
            education: vec![Education {
                id: None,
                school: "State University".into(),
                program: "Computer Science".into(),
                degree: Some("BSc".into()),
                start_date: date(2014, 9, 1),
                end_date: Some(date(2018, 6, 30)),
                current: false,
                details: String::new(),
                order_index: 1,
                created_at: None,
            }],
            skills: vec![
                skill("Rust", SkillCategory::Language, 90, 1),
                skill("Go", SkillCategory::Language, 75, 2),
                skill("PostgreSQL", SkillCategory::Database, 80, 3),
                skill("Kubernetes", SkillCategory::Cloud, 70, 4),
                skill("Docker", SkillCategory::Tool, 85, 5),
            ],
        }
    }
}

fn project(
    title: &str,
    slug: &str,
    summary: &str,
    tools: &[&str],
    tags: &[&str],
    featured: bool,
    start_date: NaiveDate,
) -> Project {
    Project {
        id: None,
        title: title.into(),
        slug: slug.into(),
        summary: summary.into(),
        content: String::new(),
        problem: None,
        approach: None,
        outcomes: None,
        tools: strings(tools),
        tags: strings(tags),
        featured,
        start_date: Some(start_date),
        end_date: None,
        external_url: None,
        source_url: None,
        status: ContentStatus::Published,
        created_at: None,
    }
}

fn gallery(url: &str, caption: &str, category: GalleryCategory, order_index: u16) -> GalleryItem {
    GalleryItem {
        id: None,
        media_url: url.into(),
        caption: Some(caption.into()),
        category,
        order_index,
        status: ContentStatus::Published,
        created_at: None,
    }
}

fn skill(name: &str, category: SkillCategory, level: u8, order_index: u16) -> Skill {
    Skill {
        id: None,
        name: name.into(),
        category,
        level: Some(level),
        order_index,
        created_at: None,
    }
}
