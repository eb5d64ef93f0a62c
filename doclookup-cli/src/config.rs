//! CLI configuration handling.
//!
//! Server and table-page options live in an optional `doclookup.toml`:
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:8080"
//! cors = true
//!
//! [table]
//! list_url = "https://api.example.com/list"
//! by_id_url = "https://api.example.com/search/by-id"
//! page_size = 50
//! language = "english"
//! ```
//!
//! Lookup settings and the MongoDB connection always come from the
//! environment.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use doclookup_axum::{DEFAULT_LISTEN, ServerConfig};
use doclookup_query::pagination::DEFAULT_PAGE_SIZE;

use crate::cli::{Language, ServeArgs};
use crate::error::{CliError, CliResult};

/// Default config file name (lives in the working directory)
pub const CONFIG_FILE_NAME: &str = "doclookup.toml";

/// doclookup CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerSection,

    /// Table page configuration
    pub table: TableSection,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the explicit file, or `doclookup.toml` in `dir` when present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path: PathBuf = dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge command-line flags over the file values.
    pub fn resolve_serve(&self, args: &ServeArgs) -> ServeOptions {
        let list_url = args.list_url.clone().or_else(|| self.table.list_url.clone());
        let by_id_url = args.by_id_url.clone().or_else(|| self.table.by_id_url.clone());

        ServeOptions {
            server: ServerConfig {
                listen: args
                    .listen
                    .clone()
                    .or_else(|| self.server.listen.clone())
                    .unwrap_or_else(|| DEFAULT_LISTEN.to_string()),
                cors: args.cors || self.server.cors,
            },
            endpoints: list_url.zip(by_id_url),
            page_size: args
                .page_size
                .or(self.table.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            language: args.language.or(self.table.language).unwrap_or_default(),
        }
    }
}

/// `[server]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address to listen on
    pub listen: Option<String>,

    /// Allow cross-origin requests
    pub cors: bool,
}

/// `[table]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableSection {
    /// External list endpoint
    pub list_url: Option<String>,

    /// External by-id endpoint
    pub by_id_url: Option<String>,

    /// Initial rows per page
    pub page_size: Option<u64>,

    /// Language of the page
    pub language: Option<Language>,
}

/// Fully resolved options of the `serve` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    /// HTTP server options
    pub server: ServerConfig,

    /// External (list, by-id) endpoints, when both are configured
    pub endpoints: Option<(String, String)>,

    /// Initial rows per page
    pub page_size: u64,

    /// Language of the table page
    pub language: Language,
}
