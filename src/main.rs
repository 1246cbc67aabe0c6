use clap::Parser;
use tracing::{error, info};
use userdb::adapter::inbound::cli::{self, command::Cli, output};
use userdb::infrastructure::config::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();
    output::configure(output::OutputConfig::new(args.json, args.quiet));

    let config = match Config::load_optional(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(command = ?args.command, "userdb starting");

    if let Err(e) = cli::run(args.command, &config) {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
