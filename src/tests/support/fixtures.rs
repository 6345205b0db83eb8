use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::content::application::domain::entities::{
    ContentStatus, Experience, GalleryCategory, GalleryItem, Post, Project, Skill, SkillCategory,
};
use crate::modules::remote_store::adapter::outgoing::InMemoryRemoteStore;
use crate::modules::remote_store::application::domain::Record;
use crate::modules::remote_store::application::services::DataAccess;

pub fn sample_project(slug: &str, status: ContentStatus) -> Project {
    Project {
        id: None,
        title: format!("Project {slug}"),
        slug: slug.to_string(),
        summary: "A sample project".to_string(),
        content: String::new(),
        problem: None,
        approach: None,
        outcomes: None,
        tools: vec!["Rust".to_string()],
        tags: Vec::new(),
        featured: false,
        start_date: None,
        end_date: None,
        external_url: None,
        source_url: None,
        status,
        created_at: None,
    }
}

pub fn sample_project_at(slug: &str, created_at: &str) -> Project {
    Project {
        created_at: Some(
            DateTime::parse_from_rfc3339(created_at)
                .unwrap()
                .with_timezone(&Utc),
        ),
        ..sample_project(slug, ContentStatus::Published)
    }
}

pub fn sample_post(slug: &str, status: ContentStatus) -> Post {
    Post {
        id: None,
        title: format!("Post {slug}"),
        slug: slug.to_string(),
        excerpt: String::new(),
        content: "Body".to_string(),
        tags: Vec::new(),
        published_at: None,
        status,
        created_at: None,
    }
}

pub fn sample_gallery_item(url: &str, category: GalleryCategory, order_index: u16) -> GalleryItem {
    GalleryItem {
        id: None,
        media_url: url.to_string(),
        caption: None,
        category,
        order_index,
        status: ContentStatus::Published,
        created_at: None,
    }
}

pub fn sample_skill(name: &str, order_index: u16) -> Skill {
    Skill {
        id: None,
        name: name.to_string(),
        category: SkillCategory::Language,
        level: Some(80),
        order_index,
        created_at: None,
    }
}

/// `start` is `YYYY-MM-DD`.
pub fn sample_experience(organization: &str, start: &str) -> Experience {
    Experience {
        id: None,
        organization: organization.to_string(),
        title: "Engineer".to_string(),
        start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
        end_date: None,
        current: false,
        description: String::new(),
        order_index: 0,
        created_at: None,
    }
}

pub fn sample_message(email: &str) -> ContactMessage {
    ContactMessage {
        id: None,
        name: "Ada".to_string(),
        email: email.to_string(),
        subject: "Hello".to_string(),
        message: "Are you available for a project?".to_string(),
        read: false,
        created_at: None,
    }
}

pub async fn seed<R: Record>(store: &InMemoryRemoteStore, records: &[R]) {
    DataAccess::new(Arc::new(store.clone()))
        .insert(records)
        .await
        .unwrap();
}
