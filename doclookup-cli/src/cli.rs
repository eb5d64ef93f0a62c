//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use doclookup_table::Labels;
use std::path::PathBuf;

/// doclookup - Look up MongoDB documents over HTTP
#[derive(Parser, Debug)]
#[command(name = "doclookup")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "doclookup - Look up MongoDB documents over HTTP", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./doclookup.toml when present)
    #[arg(short, long, global = true, env = "DOCLOOKUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the lookup HTTP server
    Serve(ServeArgs),

    /// Look up a single document in MongoDB
    Lookup(LookupArgs),

    /// Print the identity field and allowed fields
    Meta(MetaArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Serve Command
// =============================================================================

/// Arguments for the `serve` command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(short, long, env = "DOCLOOKUP_LISTEN")]
    pub listen: Option<String>,

    /// Allow cross-origin requests
    #[arg(long)]
    pub cors: bool,

    /// List endpoint used by the table page (defaults to this server)
    #[arg(long, env = "DOCLOOKUP_LIST_URL", requires = "by_id_url")]
    pub list_url: Option<String>,

    /// By-id endpoint used by the table page (defaults to this server)
    #[arg(long, env = "DOCLOOKUP_BY_ID_URL", requires = "list_url")]
    pub by_id_url: Option<String>,

    /// Initial rows per page of the table page
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Language of the table page
    #[arg(long, value_enum)]
    pub language: Option<Language>,
}

/// Languages of the table page
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    /// Labels for this language.
    pub fn labels(self) -> Labels {
        match self {
            Language::Spanish => Labels::spanish(),
            Language::English => Labels::english(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Spanish => write!(f, "spanish"),
            Language::English => write!(f, "english"),
        }
    }
}

// =============================================================================
// Lookup Command
// =============================================================================

/// Arguments for the `lookup` command
#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Identifier to look up by the configured identity field
    #[arg(long, conflicts_with_all = ["field", "value"], required_unless_present = "field")]
    pub id: Option<String>,

    /// Allow-listed field to match
    #[arg(long, requires = "value")]
    pub field: Option<String>,

    /// Value the field must equal
    #[arg(long, requires = "field")]
    pub value: Option<String>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

// =============================================================================
// Meta Command
// =============================================================================

/// Arguments for the `meta` command
#[derive(Args, Debug, Default)]
pub struct MetaArgs {
    /// Print the same JSON body as `GET /meta`
    #[arg(long)]
    pub json: bool,
}
