use serde_json::Value;

use crate::modules::content::application::domain::entities::{
    Certificate, Education, Experience, GalleryItem, Project, Skill,
};

/// Identity of a sample record independent of its database id. Two records
/// with the same key are the same sample.
pub trait NaturalKey {
    /// Columns the key is built from, in order.
    const KEY_COLUMNS: &'static [&'static str];

    fn natural_key(&self) -> String;

    /// Key of a stored row read with only `KEY_COLUMNS` selected. `None` when
    /// a key column is missing or not a string.
    fn row_key(row: &Value) -> Option<String> {
        let parts = Self::KEY_COLUMNS
            .iter()
            .map(|column| row.get(*column)?.as_str())
            .collect::<Option<Vec<&str>>>()?;
        Some(key(&parts))
    }
}

fn key(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("|")
}

impl NaturalKey for Project {
    const KEY_COLUMNS: &'static [&'static str] = &["slug"];

    fn natural_key(&self) -> String {
        key(&[&self.slug])
    }
}

impl NaturalKey for Certificate {
    const KEY_COLUMNS: &'static [&'static str] = &["title", "issuer"];

    fn natural_key(&self) -> String {
        key(&[&self.title, &self.issuer])
    }
}

impl NaturalKey for GalleryItem {
    const KEY_COLUMNS: &'static [&'static str] = &["media_url"];

    fn natural_key(&self) -> String {
        // URLs are case-sensitive past the host.
        self.media_url.trim().to_string()
    }

    fn row_key(row: &Value) -> Option<String> {
        row.get("media_url")?.as_str().map(|url| url.trim().to_string())
    }
}

impl NaturalKey for Experience {
    const KEY_COLUMNS: &'static [&'static str] = &["title", "organization", "start_date"];

    fn natural_key(&self) -> String {
        key(&[&self.title, &self.organization, &self.start_date.to_string()])
    }
}

impl NaturalKey for Education {
    const KEY_COLUMNS: &'static [&'static str] = &["school", "program", "start_date"];

    fn natural_key(&self) -> String {
        key(&[&self.school, &self.program, &self.start_date.to_string()])
    }
}

impl NaturalKey for Skill {
    const KEY_COLUMNS: &'static [&'static str] = &["name", "category"];

    fn natural_key(&self) -> String {
        key(&[&self.name, self.category.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::content::application::domain::entities::{ContentStatus, SkillCategory};
    use crate::tests::support::fixtures::{sample_experience, sample_project, sample_skill};

    #[test]
    fn project_key_is_the_slug() {
        let mut a = sample_project("ferris", ContentStatus::Draft);
        let b = sample_project("ferris", ContentStatus::Published);
        a.title = "Different title".into();
        assert_eq!(a.natural_key(), b.natural_key());
    }

    #[test]
    fn skill_key_includes_category() {
        let rust_lang = sample_skill("Rust", 1);
        let mut rust_tool = sample_skill("rust", 2);
        assert_eq!(rust_lang.natural_key(), rust_tool.natural_key());

        rust_tool.category = SkillCategory::Tool;
        assert_ne!(rust_lang.natural_key(), rust_tool.natural_key());
    }

    #[test]
    fn experience_key_uses_title_organization_and_start() {
        let a = sample_experience("Acme", "2020-01-01");
        let b = sample_experience("Acme", "2021-01-01");
        assert_ne!(a.natural_key(), b.natural_key());
        assert!(a.natural_key().contains("2020-01-01"));
    }

    #[test]
    fn stored_rows_key_like_the_records_they_hold() {
        let skill = sample_skill("Rust", 1);
        let row = serde_json::to_value(&skill).unwrap();
        assert_eq!(Skill::row_key(&row), Some(skill.natural_key()));

        let experience = sample_experience("Acme", "2020-01-01");
        let row = serde_json::to_value(&experience).unwrap();
        assert_eq!(Experience::row_key(&row), Some(experience.natural_key()));
    }

    #[test]
    fn rows_without_usable_key_columns_have_no_key() {
        assert_eq!(Project::row_key(&json!({"title": "no slug"})), None);
        assert_eq!(Project::row_key(&json!({"slug": 42})), None);
        assert_eq!(
            GalleryItem::row_key(&json!({"media_url": " https://cdn.example.com/A.png "})),
            Some("https://cdn.example.com/A.png".to_string())
        );
    }
}
