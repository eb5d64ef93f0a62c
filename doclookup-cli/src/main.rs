//! doclookup CLI - Command-line interface for the doclookup service.

use clap::Parser;

use doclookup_cli::cli::{Cli, Command};
use doclookup_cli::commands;
use doclookup_cli::error::CliResult;
use doclookup_cli::output;

#[tokio::main]
async fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run().await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    // A missing .env file is fine
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => output::warn(&format!("Ignoring .env: {}", e)),
        _ => {}
    }

    let cli = Cli::parse();

    let level = match cli.command {
        Command::Serve(_) => "info",
        _ => "warn",
    };
    doclookup_query::logging::init(level);

    match cli.command {
        Command::Serve(args) => commands::serve::run(args, cli.config.as_deref()).await,
        Command::Lookup(args) => commands::lookup::run(args).await,
        Command::Meta(args) => commands::meta::run(args).await,
        Command::Version => commands::version::run().await,
    }
}
