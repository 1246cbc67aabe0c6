//! Handler for the `bootstrap` command.

use tracing::info;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, redact_url};
use crate::adapter::outbound::sqlite::SqliteBootstrap;
use crate::domain::{define_schema, BootstrapReport};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::SchemaBootstrap;

/// Execute the bootstrap command.
///
/// # Errors
/// Returns the first schema, connection, seed or database error.
pub fn execute(config: &Config) -> Result<()> {
    let schema = define_schema()?;
    let database = redact_url(&config.database.url);
    info!(%database, "Bootstrapping database");

    let pool = create_pool(&config.database.url, config.database.pool_options())?;
    let report = SqliteBootstrap::new(pool).bootstrap(&schema)?;

    output::report("bootstrap", &report)?;
    display(&database, &report);
    Ok(())
}

fn display(database: &str, report: &BootstrapReport) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Database", database);

    output::section("Schema");
    output::field("Created", report.schema.created.len());
    output::field("Already present", report.schema.existing.len());

    output::section("Reference data");
    for table in &report.seed.tables {
        output::field(
            table.table,
            format!("{} inserted, {} present", table.inserted, table.existing),
        );
    }

    output::success("Database ready");
}
