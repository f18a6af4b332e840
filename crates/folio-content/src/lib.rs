//! Content model and store abstraction for the folio site.
//!
//! This crate provides a [`ContentStore`] trait for retrieving blog posts and
//! project records independently of where they live. This enables:
//!
//! - **Unit testing** without fixture files ([`MockStore`] behind the `mock`
//!   feature)
//! - **Backend flexibility** (local JSON fixtures, remote REST table store)
//! - **Clean separation** between page assembly and data retrieval
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Post`], [`Project`], and [`ContactMessage`] record types
//! - [`ContentStore`] trait with post/project queries and contact submission
//! - [`FixtureStore`] backend reading JSON files from a content directory
//! - [`MockStore`] for testing (behind the `mock` feature flag)
//!
//! The remote backend lives in the `folio-content-api` crate.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_content::{ContentStore, FixtureStore};
//!
//! let store = FixtureStore::new(PathBuf::from("content"));
//! for post in store.posts()? {
//!     println!("{}: {}", post.slug, post.title);
//! }
//! ```

mod fixture;
#[cfg(feature = "mock")]
mod mock;
mod model;
mod store;

pub use fixture::FixtureStore;
#[cfg(feature = "mock")]
pub use mock::MockStore;
pub use model::{ContactMessage, Post, Project};
pub use store::{ContentError, ContentStore, order_posts, order_projects};
