//! In-memory store for tests in dependent crates.

use std::sync::Mutex;

use crate::model::{ContactMessage, Post, Project};
use crate::store::{ContentError, ContentStore, order_posts, order_projects};

/// In-memory [`ContentStore`] used by tests.
///
/// Applies the same publish filtering and ordering as the real backends.
/// Submitted contact messages are retained and can be inspected with
/// [`submissions`](Self::submissions).
#[derive(Default)]
pub struct MockStore {
    posts: Vec<Post>,
    projects: Vec<Project>,
    submissions: Mutex<Vec<ContactMessage>>,
}

impl MockStore {
    /// Create an empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post record.
    #[must_use]
    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    /// Add a project record.
    #[must_use]
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Contact messages submitted so far.
    pub fn submissions(&self) -> Vec<ContactMessage> {
        self.submissions.lock().expect("mock lock poisoned").clone()
    }
}

impl ContentStore for MockStore {
    fn posts(&self) -> Result<Vec<Post>, ContentError> {
        Ok(order_posts(self.posts.clone()))
    }

    fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        Ok(self
            .posts
            .iter()
            .find(|p| p.slug == slug && p.published)
            .cloned())
    }

    fn projects(&self) -> Result<Vec<Project>, ContentError> {
        Ok(order_projects(self.projects.clone()))
    }

    fn featured_projects(&self) -> Result<Vec<Project>, ContentError> {
        let mut projects = order_projects(self.projects.clone());
        projects.retain(|p| p.featured);
        Ok(projects)
    }

    fn submit_contact(&self, message: &ContactMessage) -> Result<(), ContentError> {
        self.submissions
            .lock()
            .expect("mock lock poisoned")
            .push(message.clone());
        Ok(())
    }
}
