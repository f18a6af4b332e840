//! CLI command implementations.

mod build;
mod posts;
mod render;

use std::path::PathBuf;

use clap::Args;
use folio_content::{ContentStore, FixtureStore};
use folio_content_api::ApiStore;
use folio_site::SiteMeta;

pub(crate) use build::BuildArgs;
pub(crate) use posts::PostsArgs;
pub(crate) use render::RenderArgs;

use crate::config::{BackendKind, CliSettings, Config};
use crate::error::CliError;

/// Store/config flags shared by commands that read content.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content backend (overrides config).
    #[arg(long, value_enum)]
    backend: Option<BackendKind>,

    /// Content fixture directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Remote API base URL (overrides config).
    #[arg(long)]
    api_url: Option<String>,

    /// Remote API key (overrides config).
    #[arg(long, env = "FOLIO_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl StoreArgs {
    /// Load config with these flags applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            backend: self.backend,
            content_dir: self.content_dir.clone(),
            out_dir: None,
            api_url: self.api_url.clone(),
            api_key: self.api_key.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Construct the configured content store backend.
pub(crate) fn open_store(config: &Config) -> Result<Box<dyn ContentStore>, CliError> {
    match config.content.backend {
        BackendKind::Fixture => Ok(Box::new(FixtureStore::new(config.content.dir.clone()))),
        BackendKind::Api => {
            let api_url = config.content.api_url.as_deref().ok_or_else(|| {
                CliError::Validation("api backend requires content.api_url".to_owned())
            })?;
            let api_key = config.content.api_key.as_deref().ok_or_else(|| {
                CliError::Validation("api backend requires content.api_key".to_owned())
            })?;
            Ok(Box::new(ApiStore::new(api_url, api_key)))
        }
    }
}

/// Site chrome values from config.
pub(crate) fn site_meta(config: &Config) -> SiteMeta {
    SiteMeta {
        title: config.site.title.clone(),
        author: config.site.author.clone(),
        base_url: config.site.base_url.clone(),
    }
}
