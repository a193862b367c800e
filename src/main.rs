use clap::Parser;
use coin_notify::cli::{Cli, Commands};
use coin_notify::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    coin_notify::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Preview(args) => {
            tracing::info!(coin_id = %args.coin_id, "Building payload preview");
            args.execute(&config).await?;
        }
        Commands::Post(args) => {
            tracing::info!(coin_id = %args.coin_id, "Posting coin notification");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
