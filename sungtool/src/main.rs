mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use sungtool_core::error::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed command line: {:?}", cli);

    match &cli.command {
        None => commands::enums::run_default(&cli),
        Some(Commands::Enums(args)) => commands::enums::run(&cli, args),
        Some(Commands::Bundle(args)) => commands::bundle::run(&cli, args),
        Some(Commands::Validate(args)) => commands::validate::run(&cli, args),
        Some(Commands::Info(args)) => commands::info::run(&cli, args),
        Some(Commands::Init(args)) => commands::init::run(&cli, args),
    }
}
