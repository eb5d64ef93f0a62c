//! `doclookup serve` command - Run the lookup HTTP server.

use std::path::Path;
use std::sync::Arc;

use doclookup_axum::{AppState, LookupServer, TablePage};
use doclookup_query::StdEnvSource;
use doclookup_table::{Endpoints, HttpSource, LookupSource};

use crate::cli::ServeArgs;
use crate::commands::build_service;
use crate::config::Config;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the serve command
pub async fn run(args: ServeArgs, config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::discover(config_path, &std::env::current_dir()?)?;
    let options = config.resolve_serve(&args);

    let service = build_service(&StdEnvSource);

    output::header("doclookup server");
    kv("Listen", &options.server.listen);
    kv("CORS", if options.server.cors { "enabled" } else { "disabled" });
    kv("Table language", &options.language.to_string());

    // The table page reads the store in-process unless external endpoints are set
    let source: Arc<dyn LookupSource> = match &options.endpoints {
        Some((list_url, by_id_url)) => {
            let endpoints = Endpoints::parse(list_url, by_id_url)?;
            kv("Table list URL", endpoints.list_url.as_str());
            kv("Table by-id URL", endpoints.by_id_url.as_str());
            Arc::new(HttpSource::new(endpoints))
        }
        None => Arc::new(service.clone()),
    };
    output::newline();

    let state = AppState::new(service).with_table(TablePage {
        source,
        labels: options.language.labels(),
        page_size: options.page_size,
    });

    let server = LookupServer::new(options.server, state);
    let listener = server.bind().await?;
    output::success("Server started, press Ctrl-C to stop");

    server
        .serve(listener, doclookup_axum::shutdown_signal())
        .await?;

    output::info("Server stopped");
    Ok(())
}
