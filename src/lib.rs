pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Commands};
pub use config::Config;

/// Loads the config from an explicit path, or from the standard locations.
pub fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.validate()?;
    Ok(config)
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    init_tracing(&config)?;

    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    match command {
        Commands::Serve => {
            let prometheus_handle = if config.observability.metrics_enabled {
                use metrics_exporter_prometheus::PrometheusBuilder;
                let handle = PrometheusBuilder::new()
                    .install_recorder()
                    .context("Failed to install Prometheus recorder")?;
                info!("Prometheus metrics recorder initialized");
                Some(handle)
            } else {
                None
            };

            run_server(config, prometheus_handle).await
        }

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }

        Commands::CreateAdmin { username } => cli::cmd_create_admin(&config, &username).await,

        Commands::List => cli::cmd_list_crew(&config).await,

        Commands::Stats => cli::cmd_stats(&config).await,

        Commands::Advance { id } => cli::cmd_advance(&config, id).await,

        Commands::Track { passport } => cli::cmd_track(&config, &passport).await,

        Commands::Stages => {
            cli::cmd_stages();
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.observability.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;
    }

    Ok(())
}

fn print_help() {
    println!("Maricheck - Maritime crew registration and status tracking");
    println!();
    println!("USAGE:");
    println!("  maricheck [--config <path>] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("  serve                  Run the web API server");
    println!("  init                   Create default config file");
    println!("  create-admin <name>    Create an admin account");
    println!("  list, ls               List all crew registrations");
    println!("  stats                  Show registration counts per stage");
    println!("  advance <id>           Move a crew member to the next stage");
    println!("  track <passport>       Look up a registration by passport");
    println!("  stages                 Show the review workflow stages");
    println!("  help                   Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("  maricheck serve                   # Start the web API");
    println!("  maricheck create-admin alice      # Add an admin (password from stdin)");
    println!("  maricheck advance 3               # Move crew member 3 forward");
    println!("  maricheck track X1234567          # Show status for a passport");
}

async fn run_server(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<()> {
    info!("Maricheck v{} starting...", env!("CARGO_PKG_VERSION"));

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);

    let state = api::create_app_state_from_config(config, prometheus_handle).await?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
