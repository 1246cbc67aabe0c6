//! Handler for the `status` command.

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, redact_url};
use crate::adapter::outbound::sqlite::SqliteBootstrap;
use crate::domain::{define_schema, BootstrapState, StatusReport};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::SchemaBootstrap;

/// Execute the status command.
///
/// # Errors
/// Returns an error if the database cannot be opened or read.
pub fn execute(config: &Config) -> Result<()> {
    let schema = define_schema()?;
    let pool = create_pool(&config.database.url, config.database.pool_options())?;
    let status = SqliteBootstrap::new(pool).inspect(&schema)?;

    output::report("status", &status)?;
    display(&redact_url(&config.database.url), &status);
    Ok(())
}

fn display(database: &str, status: &StatusReport) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Database", database);
    output::field("State", status.state);

    if !status.counts.is_empty() {
        output::section("Tables");
        for count in &status.counts {
            output::field(&count.table, count.rows);
        }
    }

    if status.state == BootstrapState::Uninitialized {
        output::section("Not ready");
        if !status.missing_tables.is_empty() {
            output::warning(&format!(
                "Missing tables: {}",
                status.missing_tables.join(", ")
            ));
        }
        if status.missing_seed_rows > 0 {
            output::warning(&format!(
                "{} reference rows missing",
                status.missing_seed_rows
            ));
        }
        if status.conflicting_seed_rows > 0 {
            output::warning(&format!(
                "{} reference rows differ from the canonical data",
                status.conflicting_seed_rows
            ));
        }
        output::field("Next", "run `userdb bootstrap`");
    }
}
