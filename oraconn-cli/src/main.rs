//! oraconn - render Oracle connection strings from a descriptor inventory.

use clap::Parser;

use oraconn_cli::cli::{Cli, Command};
use oraconn_cli::commands;
use oraconn_cli::config::Config;
use oraconn_cli::error::CliResult;
use oraconn_cli::output;
use oraconn_format::logging::{self, LogSettings};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // `-v` turns logging on even when the environment leaves it off.
    let settings = match cli.verbose {
        0 => LogSettings::from_env(),
        count => Some(LogSettings::from_env().unwrap_or_default().with_verbosity(count)),
    };
    if let Some(settings) = settings {
        logging::init_with(settings);
    }

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Format(args) => commands::format::run(args, &config).await,
        Command::List(args) => commands::list::run(args, &config).await,
        Command::Version => commands::version::run().await,
    }
}
