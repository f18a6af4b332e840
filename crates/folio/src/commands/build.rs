//! `folio build` command implementation.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use folio_site::SiteBuilder;
use tracing::debug;

use super::{StoreArgs, open_store, site_meta};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Output directory (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, content retrieval, or page
    /// writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let mut config = self.store.load_config()?;
        if let Some(out_dir) = self.out_dir {
            config.build.out_dir = out_dir;
        }

        debug!(
            backend = ?config.content.backend,
            out_dir = %config.build.out_dir.display(),
            "loaded configuration"
        );
        output.info(&format!(
            "Building site into {}",
            config.build.out_dir.display()
        ));

        let store = open_store(&config)?;
        let builder = SiteBuilder::new(
            store.as_ref(),
            site_meta(&config),
            config.build.out_dir.clone(),
        );

        let started = Instant::now();
        let summary = builder.build()?;
        debug!(
            pages = summary.total(),
            elapsed = ?started.elapsed(),
            "site build finished"
        );

        output.success(&format!(
            "Wrote {} pages ({} posts, {} indexes) in {:.2?}",
            summary.total(),
            summary.posts,
            summary.indexes,
            started.elapsed()
        ));
        Ok(())
    }
}
