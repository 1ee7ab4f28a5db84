use std::path::PathBuf;

use catalog_app::platform::{
    self,
    config::{AppConfig, DEFAULT_CONFIG_FILE},
    logging::{self, LogDestination},
};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "catalog_app", about = "Browse popular, top rated and genre movie listings")]
struct Args {
    /// Route to open, e.g. `/action?page=3` or `/movie/603`. Defaults to the last visited route.
    route: Option<String>,
    /// RON settings file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Where log records go; overrides the settings file.
    #[arg(long, value_enum)]
    log: Option<LogDestination>,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?.with_env();
    logging::initialize(args.log.unwrap_or(config.log), args.verbose);
    platform::run_app(config, args.route)
}
