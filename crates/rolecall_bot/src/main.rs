use clap::Parser;
use rolecall::{ControllerManager, JsonFileStore};
use rolecall_bot::{BotConfig, RolecallHandler, SerenityRoleService};
use serenity::client::Client;
use serenity::http::Http;
use serenity::model::gateway::GatewayIntents;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rolecall reaction-role bot", long_about = None)]
struct Args {
    /// Path to a TOML config file (default: ./rolecall.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = BotConfig::load(args.config.as_deref())?;
    let token = config.resolve_token()?;

    info!(
        store = %config.store_path.display(),
        prefix = %config.prefix,
        "Starting Rolecall"
    );

    let http = Arc::new(Http::new(&token));
    let service = Arc::new(SerenityRoleService::new(http));
    let store = Arc::new(JsonFileStore::new(config.store_path.clone()));
    let manager = Arc::new(ControllerManager::new(service, store));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(RolecallHandler::new(manager, config.prefix.clone()))
        .await?;

    client.start().await?;
    Ok(())
}
