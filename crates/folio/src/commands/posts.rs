//! `folio posts` command implementation.

use clap::Args;
use folio_site::format_date;
use tracing::debug;

use super::{StoreArgs, open_store};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the posts command.
#[derive(Args)]
pub(crate) struct PostsArgs {
    #[command(flatten)]
    store: StoreArgs,
}

impl PostsArgs {
    /// Execute the posts command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content retrieval fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.store.load_config()?;
        let store = open_store(&config)?;
        let posts = store.posts()?;
        debug!(count = posts.len(), "fetched published posts");

        if posts.is_empty() {
            output.info("No published posts.");
            return Ok(());
        }

        for post in &posts {
            let date = post
                .published_at
                .as_ref()
                .map_or_else(|| "(undated)".to_owned(), format_date);
            output.info(&format!("{date}  {}  {}", post.slug, post.title));
        }
        Ok(())
    }
}
