use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use userview::cli::Cli;
use userview::config::Config;
use userview::logging::init_tracing;
use userview::ui::runtime;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("could not load {}", config_path.display()))?;
    cli.apply_to(&mut config);
    config.validate()?;

    info!(path = %config_path.display(), "configuration loaded");
    runtime::run(config).await
}
