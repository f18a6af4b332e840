//! `folio render` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use folio_markdown::render;
use tracing::debug;

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,
}

impl RenderArgs {
    /// Execute the render command, writing the HTML fragment to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let source = std::fs::read_to_string(&self.file)?;
        let html = render(&source);
        debug!(
            file = %self.file.display(),
            bytes = source.len(),
            "rendered markdown file"
        );
        let _ = Term::stdout().write_line(&html);
        Ok(())
    }
}
