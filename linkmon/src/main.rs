//! linkmon Server Entry Point

use clap::Parser;
use linkmon::cli::{Cli, Commands};
use linkmon::config::ServerConfig;
use linkmon::{bootstrap, logging, server};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let config = match cli.command {
        Some(Commands::Serve(args)) => args.into_config(),
        None => ServerConfig::from_env(),
    };

    let state = match bootstrap::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Initialization failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(state, &config.bind_addr()).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
