//! Sync HTTP client for the remote table store.

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use folio_content::{ContactMessage, ContentError, ContentStore, Post, Project};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Table names on the remote store.
const POSTS_TABLE: &str = "blog_posts";
const PROJECTS_TABLE: &str = "projects";
const CONTACT_TABLE: &str = "contact_messages";

/// Remote store error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure.
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// Non-success status from the API.
    #[error("HTTP {status}: {body}")]
    HttpResponse { status: u16, body: String },

    /// Response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ApiError> for ContentError {
    fn from(err: ApiError) -> Self {
        ContentError::Backend(err.to_string())
    }
}

/// Content store backed by a PostgREST-style HTTP API.
///
/// Each query maps to a `GET /rest/v1/<table>` with filters in the query
/// string; contact submissions are a `POST` into the contact table.
pub struct ApiStore {
    agent: Agent,
    base_url: String,
    api_key: String,
}

impl ApiStore {
    /// Create a client for the given API base URL and key.
    ///
    /// The key is sent both as the `apikey` header and as a bearer token,
    /// which is what PostgREST-style gateways expect for anonymous reads.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    fn table_url(&self, table: &str, filters: &str) -> String {
        format!("{}/rest/v1/{table}?{filters}", self.base_url)
    }

    fn get_rows<T: DeserializeOwned>(&self, table: &str, filters: &str) -> Result<Vec<T>, ApiError> {
        let url = self.table_url(table, filters);
        debug!(%url, "querying remote table");

        let response = self
            .agent
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let raw = body_reader.read_to_string()?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn post_contact(&self, message: &ContactMessage) -> Result<(), ApiError> {
        let url = format!("{}/rest/v1/{CONTACT_TABLE}", self.base_url);
        debug!(%url, "submitting contact message");

        let response = self
            .agent
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .send_json(message)?;

        let status = response.status().as_u16();
        if status >= 400 {
            let error_body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::HttpResponse {
                status,
                body: error_body,
            });
        }
        Ok(())
    }
}

/// Filter string for the published-posts listing.
fn posts_filters() -> String {
    "select=*&published=eq.true&order=published_at.desc".to_owned()
}

/// Unreserved characters per RFC 3986: A-Z a-z 0-9 - . _ ~
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a filter value for the query string.
fn encode_query_value(input: &str) -> String {
    percent_encode(input.as_bytes(), QUERY_VALUE_ENCODE_SET).to_string()
}

/// Filter string for a single post lookup by slug.
fn post_by_slug_filters(slug: &str) -> String {
    format!(
        "select=*&slug=eq.{}&published=eq.true&limit=1",
        encode_query_value(slug)
    )
}

/// Filter string for the project listing, optionally featured-only.
fn project_filters(featured_only: bool) -> String {
    if featured_only {
        "select=*&featured=eq.true&order=order_index.asc".to_owned()
    } else {
        "select=*&order=order_index.asc".to_owned()
    }
}

impl ContentStore for ApiStore {
    fn posts(&self) -> Result<Vec<Post>, ContentError> {
        Ok(self.get_rows(POSTS_TABLE, &posts_filters())?)
    }

    fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
        let rows: Vec<Post> = self.get_rows(POSTS_TABLE, &post_by_slug_filters(slug))?;
        Ok(rows.into_iter().next())
    }

    fn projects(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self.get_rows(PROJECTS_TABLE, &project_filters(false))?)
    }

    fn featured_projects(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self.get_rows(PROJECTS_TABLE, &project_filters(true))?)
    }

    fn submit_contact(&self, message: &ContactMessage) -> Result<(), ContentError> {
        Ok(self.post_contact(message)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_posts_filters() {
        assert_eq!(
            posts_filters(),
            "select=*&published=eq.true&order=published_at.desc"
        );
    }

    #[test]
    fn test_post_by_slug_filters() {
        assert_eq!(
            post_by_slug_filters("my-post"),
            "select=*&slug=eq.my-post&published=eq.true&limit=1"
        );
    }

    #[test]
    fn test_post_by_slug_filters_encodes_reserved_characters() {
        // A slug containing query metacharacters must not alter the filter.
        assert_eq!(
            post_by_slug_filters("a&b=c"),
            "select=*&slug=eq.a%26b%3Dc&published=eq.true&limit=1"
        );
    }

    #[test]
    fn test_encode_query_value_keeps_unreserved() {
        assert_eq!(encode_query_value("my-post_1.x~"), "my-post_1.x~");
    }

    #[test]
    fn test_project_filters() {
        assert_eq!(project_filters(false), "select=*&order=order_index.asc");
        assert_eq!(
            project_filters(true),
            "select=*&featured=eq.true&order=order_index.asc"
        );
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let store = ApiStore::new("https://api.example.com/", "key");
        assert_eq!(
            store.table_url("blog_posts", "select=*"),
            "https://api.example.com/rest/v1/blog_posts?select=*"
        );
    }
}
