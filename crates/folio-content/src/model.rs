//! Record types shared by all content store backends.
//!
//! Field names match the remote table columns, so the same serde definitions
//! decode both the local JSON fixtures and REST API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    /// URL slug, unique per post (e.g., "my-first-post").
    pub slug: String,
    /// Short summary shown in listings and page metadata.
    pub excerpt: String,
    /// Raw markdown body; rendered by `folio-markdown` at display time.
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Unpublished posts are invisible to every store query.
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Estimated reading time in minutes.
    pub reading_time: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A portfolio project record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Featured projects surface on the home page.
    pub featured: bool,
    /// Display ordering, ascending.
    pub order_index: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A contact form submission, as entered by a visitor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_post_decodes_from_fixture_record() {
        let json = r##"{
            "id": "1",
            "title": "Hello",
            "slug": "hello",
            "excerpt": "First post",
            "content": "# Hello",
            "author": "Ada",
            "featured_image": null,
            "published": true,
            "published_at": "2024-03-01T12:00:00Z",
            "reading_time": 3,
            "tags": ["intro"],
            "created_at": "2024-02-28T09:00:00Z",
            "updated_at": "2024-03-01T12:00:00Z"
        }"##;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "hello");
        assert_eq!(post.tags, vec!["intro".to_owned()]);
        assert!(post.published_at.is_some());
    }

    #[test]
    fn test_post_optional_fields_default() {
        // Fixture records may omit optional columns entirely.
        let json = r#"{
            "id": "2",
            "title": "Draft",
            "slug": "draft",
            "excerpt": "",
            "content": "",
            "author": "Ada",
            "published": false,
            "reading_time": 1,
            "created_at": "2024-02-28T09:00:00Z",
            "updated_at": "2024-02-28T09:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.published_at, None);
        assert_eq!(post.featured_image, None);
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_project_decodes() {
        let json = r#"{
            "id": "p1",
            "title": "Widget",
            "description": "A widget",
            "thumbnail": "/img/widget.png",
            "tags": ["rust"],
            "github_url": "https://github.com/x/widget",
            "demo_url": null,
            "featured": true,
            "order_index": 2,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.order_index, 2);
        assert_eq!(project.demo_url, None);
        assert!(project.featured);
    }
}
