//! trackbot CLI: run the Telegram bot with Telemetree update tracking.
//! Config from env and optional CLI args.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

use config::BotConfig;
use handler_chain::HandlerChain;
use telemetree_client::{TelemetreeClient, UpdateTracker};
use track_handlers::{StartCommandHandler, TrackMessageHandler};
use trackbot_core::{init_tracing, Bot};
use trackbot_telegram::{run_repl, TelegramBotAdapter};

#[derive(Parser)]
#[command(name = "trackbot")]
#[command(about = "Telegram bot that mirrors updates into Telemetree analytics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(token).await,
    }
}

/// Startup sequence: tracing → Telemetree initialize → readiness re-check → Telegram
/// bot + handler chain → REPL. Any failure before the REPL is fatal: full context is
/// logged and the process exits non-zero. After the REPL starts, all failures are
/// contained per message.
async fn run(token: Option<String>) -> Result<()> {
    let config = BotConfig::load(token)?;
    init_tracing(config.log_file.as_deref())?;

    info!("Starting Telemetree and bot initialization");

    let mut telemetree = TelemetreeClient::new(
        config.telemetree_project_id.clone(),
        config.telemetree_api_key.clone(),
    );
    if let Some(url) = &config.telemetree_config_url {
        telemetree = telemetree.with_config_url(url.clone());
    }

    if let Err(e) = telemetree.initialize().await {
        error!(
            telemetree_ready = telemetree.is_ready(),
            bot_initialized = false,
            error = %e,
            "Failed to initialize services"
        );
        anyhow::bail!("Telemetree initialization failed: {e}");
    }

    // Initialization can nominally succeed while leaving the client without its
    // event-building capability; that is the same fatal path.
    if !telemetree.is_ready() {
        error!(
            telemetree_ready = false,
            bot_initialized = false,
            "Telemetree services not properly initialized"
        );
        anyhow::bail!("Telemetree services not properly initialized");
    }
    info!(
        events_host = ?telemetree.events_host(),
        "Telemetree client initialized successfully"
    );

    info!("Initializing Telegram bot");
    let mut bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(url) = &config.telegram_api_url {
        bot = bot.set_api_url(url.parse()?);
    }

    let tracker: Arc<dyn UpdateTracker> = Arc::new(telemetree);
    let sender: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(StartCommandHandler::new(tracker.clone(), sender)))
        .add_handler(Arc::new(TrackMessageHandler::new(tracker)));

    info!("Bot is running with Telemetree tracking enabled");
    run_repl(bot, chain).await
}
