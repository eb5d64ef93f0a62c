//! `doclookup lookup` command - Look up one document directly in MongoDB.

use doclookup_query::StdEnvSource;
use tracing::debug;

use crate::cli::LookupArgs;
use crate::commands::build_service;
use crate::error::CliResult;
use crate::output;

/// Run the lookup command
pub async fn run(args: LookupArgs) -> CliResult<()> {
    let service = build_service(&StdEnvSource);

    let doc = match args.id.as_deref() {
        Some(id) => {
            debug!(id = %id, "Looking up by id");
            service.by_id(Some(id)).await?
        }
        None => {
            debug!(field = ?args.field, "Looking up by field");
            service
                .by_field(args.field.as_deref(), args.value.as_deref())
                .await?
        }
    };

    output::json(&doc, args.compact)
}
