//! JSON fixture backend.
//!
//! Reads `posts.json` and `projects.json` from a content directory. Files are
//! re-read on every query; the data set is a handful of records, so there is
//! no cross-call cache to invalidate.
//!
//! Contact submissions are appended to `submissions.json` in the same
//! directory, since a static fixture has no table to insert into.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::model::{ContactMessage, Post, Project};
use crate::store::{ContentError, ContentStore, order_posts, order_projects};

const POSTS_FILE: &str = "posts.json";
const PROJECTS_FILE: &str = "projects.json";
const SUBMISSIONS_FILE: &str = "submissions.json";

/// Content store backed by JSON files in a local directory.
pub struct FixtureStore {
    dir: PathBuf,
}

/// Stored form of one contact submission.
#[derive(Serialize, Deserialize)]
struct SubmissionRecord {
    id: Uuid,
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl FixtureStore {
    /// Create a fixture store rooted at the given content directory.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<T, ContentError> {
        let path = self.dir.join(file);
        let raw = std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ContentError::Parse { path, source })
    }

    fn load_posts(&self) -> Result<Vec<Post>, ContentError> {
        let posts: Vec<Post> = self.read_json(POSTS_FILE)?;
        debug!(count = posts.len(), "loaded posts fixture");
        Ok(posts)
    }

    fn load_projects(&self) -> Result<Vec<Project>, ContentError> {
        let projects: Vec<Project> = self.read_json(PROJECTS_FILE)?;
        debug!(count = projects.len(), "loaded projects fixture");
        Ok(projects)
    }
}

impl ContentStore for FixtureStore {
    fn posts(&self) -> Result<Vec<Post>, ContentError> {
        Ok(order_posts(self.load_posts()?))
    }

    fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        let post = self
            .load_posts()?
            .into_iter()
            .find(|p| p.slug == slug && p.published);
        Ok(post)
    }

    fn projects(&self) -> Result<Vec<Project>, ContentError> {
        Ok(order_projects(self.load_projects()?))
    }

    fn featured_projects(&self) -> Result<Vec<Project>, ContentError> {
        let mut projects = order_projects(self.load_projects()?);
        projects.retain(|p| p.featured);
        Ok(projects)
    }

    fn submit_contact(&self, message: &ContactMessage) -> Result<(), ContentError> {
        let path = self.dir.join(SUBMISSIONS_FILE);
        let mut submissions: Vec<SubmissionRecord> = if path.exists() {
            self.read_json(SUBMISSIONS_FILE)?
        } else {
            Vec::new()
        };
        submissions.push(SubmissionRecord {
            id: Uuid::new_v4(),
            name: message.name.clone(),
            email: message.email.clone(),
            subject: message.subject.clone(),
            message: message.message.clone(),
            status: "pending".to_owned(),
            created_at: Utc::now(),
        });
        write_json(&path, &submissions)?;
        debug!(count = submissions.len(), "recorded contact submission");
        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ContentError> {
    let raw = serde_json::to_string_pretty(value).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, raw).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write_fixture(dir: &TempDir, file: &str, body: &str) {
        std::fs::write(dir.path().join(file), body).unwrap();
    }

    fn store_with_posts(dir: &TempDir) -> FixtureStore {
        write_fixture(
            dir,
            POSTS_FILE,
            r##"[
                {
                    "id": "1", "title": "Newer", "slug": "newer",
                    "excerpt": "", "content": "# Newer", "author": "Ada",
                    "published": true, "published_at": "2024-03-02T00:00:00Z",
                    "reading_time": 2, "tags": [],
                    "created_at": "2024-03-01T00:00:00Z",
                    "updated_at": "2024-03-01T00:00:00Z"
                },
                {
                    "id": "2", "title": "Older", "slug": "older",
                    "excerpt": "", "content": "# Older", "author": "Ada",
                    "published": true, "published_at": "2024-03-01T00:00:00Z",
                    "reading_time": 2, "tags": [],
                    "created_at": "2024-02-01T00:00:00Z",
                    "updated_at": "2024-02-01T00:00:00Z"
                },
                {
                    "id": "3", "title": "Draft", "slug": "draft",
                    "excerpt": "", "content": "", "author": "Ada",
                    "published": false,
                    "reading_time": 1, "tags": [],
                    "created_at": "2024-02-01T00:00:00Z",
                    "updated_at": "2024-02-01T00:00:00Z"
                }
            ]"##,
        );
        FixtureStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn test_posts_published_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = store_with_posts(&dir);
        let posts = store.posts().unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newer", "older"]);
    }

    #[test]
    fn test_post_by_slug() {
        let dir = TempDir::new().unwrap();
        let store = store_with_posts(&dir);
        let post = store.post_by_slug("older").unwrap().unwrap();
        assert_eq!(post.title, "Older");
    }

    #[test]
    fn test_post_by_slug_hides_unpublished() {
        let dir = TempDir::new().unwrap();
        let store = store_with_posts(&dir);
        assert_eq!(store.post_by_slug("draft").unwrap(), None);
    }

    #[test]
    fn test_post_by_slug_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store_with_posts(&dir);
        assert_eq!(store.post_by_slug("nope").unwrap(), None);
    }

    #[test]
    fn test_missing_fixture_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = FixtureStore::new(dir.path().to_path_buf());
        assert!(matches!(store.posts(), Err(ContentError::Io { .. })));
    }

    #[test]
    fn test_malformed_fixture_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_fixture(&dir, POSTS_FILE, "not json");
        let store = FixtureStore::new(dir.path().to_path_buf());
        assert!(matches!(store.posts(), Err(ContentError::Parse { .. })));
    }

    #[test]
    fn test_featured_projects_filtered_and_ordered() {
        let dir = TempDir::new().unwrap();
        write_fixture(
            &dir,
            PROJECTS_FILE,
            r#"[
                {
                    "id": "b", "title": "B", "description": "", "thumbnail": "",
                    "featured": true, "order_index": 2,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                },
                {
                    "id": "a", "title": "A", "description": "", "thumbnail": "",
                    "featured": true, "order_index": 1,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                },
                {
                    "id": "c", "title": "C", "description": "", "thumbnail": "",
                    "featured": false, "order_index": 0,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                }
            ]"#,
        );
        let store = FixtureStore::new(dir.path().to_path_buf());
        let featured = store.featured_projects().unwrap();
        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_submit_contact_appends() {
        let dir = TempDir::new().unwrap();
        let store = FixtureStore::new(dir.path().to_path_buf());
        let message = ContactMessage {
            name: "Visitor".to_owned(),
            email: "v@example.com".to_owned(),
            subject: None,
            message: "Hi".to_owned(),
        };
        store.submit_contact(&message).unwrap();
        store.submit_contact(&message).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(SUBMISSIONS_FILE)).unwrap();
        let records: Vec<SubmissionRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, "pending");
        assert_eq!(records[0].email, "v@example.com");
    }
}
