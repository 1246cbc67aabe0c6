//! Handler for the `schema` command. Never connects to a database.

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::sqlite::ddl;
use crate::domain::define_schema;
use crate::error::Result;

/// Execute the schema command.
///
/// # Errors
/// Returns an error if the schema definition is invalid.
pub fn execute() -> Result<()> {
    let schema = define_schema()?;
    if output::is_json() {
        return output::report("schema", &schema);
    }
    output::raw(&ddl::render_script(&schema));
    Ok(())
}
