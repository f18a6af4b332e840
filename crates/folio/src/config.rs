//! Configuration management for the folio CLI.
//!
//! Parses `folio.toml` with serde and auto-discovers the config file in the
//! working directory or its parents. CLI settings can be applied during load
//! via [`CliSettings`]; a missing config file just yields defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub(crate) struct CliSettings {
    /// Override content backend.
    pub backend: Option<BackendKind>,
    /// Override content fixture directory.
    pub content_dir: Option<PathBuf>,
    /// Override build output directory.
    pub out_dir: Option<PathBuf>,
    /// Override remote API base URL.
    pub api_url: Option<String>,
    /// Override remote API key.
    pub api_key: Option<String>,
}

/// Which content store backend to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum BackendKind {
    /// Local JSON fixture files.
    Fixture,
    /// Remote REST table store.
    Api,
}

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct Config {
    /// Site chrome values.
    pub site: SiteConfig,
    /// Content store configuration.
    pub content: ContentConfig,
    /// Build output configuration.
    pub build: BuildConfig,
}

/// Site chrome configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct SiteConfig {
    /// Site title, appended to page titles.
    pub title: String,
    /// Site author, used as the default byline.
    pub author: String,
    /// Base URL for absolute links.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_owned(),
            author: String::new(),
            base_url: String::new(),
        }
    }
}

/// Content store configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ContentConfig {
    /// Backend selection.
    pub backend: BackendKind,
    /// Fixture directory (fixture backend).
    pub dir: PathBuf,
    /// API base URL (api backend).
    pub api_url: Option<String>,
    /// API key (api backend).
    pub api_key: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Fixture,
            dir: PathBuf::from("content"),
            api_url: None,
            api_key: None,
        }
    }
}

/// Build output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct BuildConfig {
    /// Output directory for generated pages.
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl Config {
    /// Load configuration, applying CLI overrides.
    ///
    /// When `path` is None, `folio.toml` is searched for in the working
    /// directory and its parents; if none exists, defaults are used.
    pub(crate) fn load(
        path: Option<&Path>,
        cli: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => discover_config(),
        };

        let mut config = match resolved {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(backend) = cli.backend {
            self.content.backend = backend;
        }
        if let Some(dir) = &cli.content_dir {
            self.content.dir.clone_from(dir);
        }
        if let Some(out_dir) = &cli.out_dir {
            self.build.out_dir.clone_from(out_dir);
        }
        if let Some(api_url) = &cli.api_url {
            self.content.api_url = Some(api_url.clone());
        }
        if let Some(api_key) = &cli.api_key {
            self.content.api_key = Some(api_key.clone());
        }
    }
}

/// Search for `folio.toml` in the working directory and its parents.
fn discover_config() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_when_no_file() {
        let config = Config::default();
        assert_eq!(config.content.backend, BackendKind::Fixture);
        assert_eq!(config.content.dir, PathBuf::from("content"));
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert_eq!(config.site.title, "Folio");
    }

    #[test]
    fn test_parse_full_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[site]
title = "My Site"
author = "Ada"
base_url = "https://example.com"

[content]
backend = "api"
api_url = "https://db.example.com"
api_key = "secret"

[build]
out_dir = "public"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.site.title, "My Site");
        assert_eq!(config.content.backend, BackendKind::Api);
        assert_eq!(config.content.api_url.as_deref(), Some("https://db.example.com"));
        assert_eq!(config.build.out_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let cli = CliSettings {
            backend: Some(BackendKind::Api),
            content_dir: Some(PathBuf::from("elsewhere")),
            out_dir: None,
            api_url: Some("https://other.example.com".to_owned()),
            api_key: None,
        };
        let mut config = Config::default();
        config.apply_cli(&cli);
        assert_eq!(config.content.backend, BackendKind::Api);
        assert_eq!(config.content.dir, PathBuf::from("elsewhere"));
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert_eq!(
            config.content.api_url.as_deref(),
            Some("https://other.example.com")
        );
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse { .. })
        ));
    }
}
