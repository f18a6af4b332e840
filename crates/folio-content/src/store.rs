//! Content store trait and error type.
//!
//! Backends implement [`ContentStore`] so page assembly never cares whether
//! records come from local JSON fixtures or a remote table store. Query
//! semantics (publish filtering, ordering) are shared here so every backend
//! agrees on them.

use std::path::PathBuf;

use crate::model::{ContactMessage, Post, Project};

/// Content store error with backend-specific detail.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// I/O error reading a fixture file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Record data could not be decoded.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Remote backend failure (transport, status, or response decode).
    #[error("content backend error: {0}")]
    Backend(String),
}

/// Abstraction over post/project retrieval and contact submission.
///
/// All queries see published posts only. Implementations are synchronous and
/// object-safe; callers hold a `&dyn ContentStore`.
pub trait ContentStore {
    /// Published posts, newest publish date first.
    fn posts(&self) -> Result<Vec<Post>, ContentError>;

    /// Published post with the given slug, or `Ok(None)` when absent.
    fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError>;

    /// All projects, ascending `order_index`.
    fn projects(&self) -> Result<Vec<Project>, ContentError>;

    /// Featured projects, ascending `order_index`.
    fn featured_projects(&self) -> Result<Vec<Project>, ContentError>;

    /// Record a visitor's contact form submission.
    fn submit_contact(&self, message: &ContactMessage) -> Result<(), ContentError>;
}

/// Filter to published posts and sort newest publish date first.
///
/// Posts without a publish date sort last; the stable sort preserves their
/// relative order.
#[must_use]
pub fn order_posts(mut posts: Vec<Post>) -> Vec<Post> {
    posts.retain(|p| p.published);
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts
}

/// Sort projects by ascending display order.
#[must_use]
pub fn order_projects(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by_key(|p| p.order_index);
    projects
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn post(slug: &str, published: bool, published_at: Option<i64>) -> Post {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        Post {
            id: slug.to_owned(),
            title: slug.to_owned(),
            slug: slug.to_owned(),
            excerpt: String::new(),
            content: String::new(),
            author: "Ada".to_owned(),
            featured_image: None,
            published,
            published_at: published_at.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
            reading_time: 1,
            tags: Vec::new(),
            created_at: epoch,
            updated_at: epoch,
        }
    }

    fn project(id: &str, order_index: i64, featured: bool) -> Project {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        Project {
            id: id.to_owned(),
            title: id.to_owned(),
            description: String::new(),
            long_description: None,
            thumbnail: String::new(),
            tags: Vec::new(),
            github_url: None,
            demo_url: None,
            featured,
            order_index,
            created_at: epoch,
            updated_at: epoch,
        }
    }

    #[test]
    fn test_order_posts_filters_unpublished() {
        let ordered = order_posts(vec![post("a", true, Some(10)), post("b", false, Some(20))]);
        let slugs: Vec<&str> = ordered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a"]);
    }

    #[test]
    fn test_order_posts_newest_first() {
        let ordered = order_posts(vec![
            post("old", true, Some(10)),
            post("new", true, Some(30)),
            post("mid", true, Some(20)),
        ]);
        let slugs: Vec<&str> = ordered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_order_posts_undated_sort_last_in_input_order() {
        let ordered = order_posts(vec![
            post("u1", true, None),
            post("dated", true, Some(5)),
            post("u2", true, None),
        ]);
        let slugs: Vec<&str> = ordered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["dated", "u1", "u2"]);
    }

    #[test]
    fn test_order_projects_by_order_index() {
        let ordered = order_projects(vec![
            project("c", 3, false),
            project("a", 1, true),
            project("b", 2, false),
        ]);
        let ids: Vec<&str> = ordered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
