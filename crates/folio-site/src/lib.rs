//! Page assembly and static site build for folio.
//!
//! Takes records from a [`ContentStore`], renders post bodies through
//! `folio-markdown`, and wraps them in full HTML pages. [`SiteBuilder`]
//! writes the whole site (one page per published post plus the project
//! index) to an output directory.
//!
//! # Trust boundary
//!
//! The rendered markdown fragment is embedded **unescaped**: post bodies are
//! trusted, author-controlled content. Every metadata string that lands in
//! page chrome (titles, excerpts, tags, project descriptions) goes through
//! [`escape_html`] since those fields also travel through the remote store.
//!
//! [`ContentStore`]: folio_content::ContentStore

mod builder;
mod page;

pub use builder::{BuildSummary, SiteBuilder, SiteError};
pub use page::{PostPage, ProjectIndex, SiteMeta, escape_html, format_date};
