//! `doclookup meta` command - Print the resolved lookup settings.

use doclookup_query::{LookupSettings, StdEnvSource};

use crate::cli::MetaArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the meta command
pub async fn run(args: MetaArgs) -> CliResult<()> {
    let settings = LookupSettings::from_env(&StdEnvSource);
    let meta = settings.meta();

    if args.json {
        return output::json(&meta, true);
    }

    output::header("Lookup settings");
    kv("Identity field", &meta.primary_id_field);
    kv(
        "Secondary index",
        settings.secondary_unique_field.as_deref().unwrap_or("(none)"),
    );

    output::newline();
    output::section("Allowed fields");
    if meta.allowed_fields.is_empty() {
        output::dim("  (none, by-field lookups are rejected)");
    }
    for field in &meta.allowed_fields {
        output::list_item(field);
    }

    Ok(())
}
