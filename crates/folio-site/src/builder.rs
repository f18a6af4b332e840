//! Static site build over a content store.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use folio_content::{ContentError, ContentStore};

use crate::page::{PostPage, ProjectIndex, SiteMeta};

/// Error returned when a site build fails.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Content store failure.
    #[error("{0}")]
    Content(#[from] ContentError),
    /// I/O error writing an output file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counters reported after a successful build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Post pages written under `blog/`.
    pub posts: usize,
    /// Index pages written (currently just `projects/index.html`).
    pub indexes: usize,
}

impl BuildSummary {
    /// Total pages written.
    #[must_use]
    pub fn total(&self) -> usize {
        self.posts + self.indexes
    }
}

/// Writes the full site to an output directory.
///
/// One page per published post at `blog/<slug>/index.html`, plus the
/// project index at `projects/index.html`. Directories are created as
/// needed; existing files are overwritten.
pub struct SiteBuilder<'a> {
    store: &'a dyn ContentStore,
    meta: SiteMeta,
    out_dir: PathBuf,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder writing to the given output directory.
    #[must_use]
    pub fn new(store: &'a dyn ContentStore, meta: SiteMeta, out_dir: PathBuf) -> Self {
        Self {
            store,
            meta,
            out_dir,
        }
    }

    /// Build every page and return the write counters.
    pub fn build(&self) -> Result<BuildSummary, SiteError> {
        let mut summary = BuildSummary::default();

        for post in self.store.posts()? {
            let html = PostPage::build(&post, &self.meta);
            let path = self.out_dir.join("blog").join(&post.slug).join("index.html");
            write_page(&path, &html)?;
            debug!(slug = %post.slug, "wrote post page");
            summary.posts += 1;
        }

        let projects = self.store.projects()?;
        let html = ProjectIndex::build(&projects, &self.meta);
        write_page(&self.out_dir.join("projects").join("index.html"), &html)?;
        summary.indexes += 1;

        info!(
            posts = summary.posts,
            indexes = summary.indexes,
            "site build complete"
        );
        Ok(summary)
    }
}

fn write_page(path: &Path, html: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SiteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, html).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
