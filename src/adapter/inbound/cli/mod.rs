//! CLI module graph.

pub mod bootstrap;
pub mod command;
pub mod output;
pub mod schema;
pub mod status;

use crate::error::Result;
use crate::infrastructure::config::Config;
use command::Commands;

/// Dispatch a parsed subcommand.
///
/// # Errors
/// Propagates the handler's error.
pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Bootstrap => bootstrap::execute(config),
        Commands::Schema => schema::execute(),
        Commands::Status => status::execute(config),
    }
}
