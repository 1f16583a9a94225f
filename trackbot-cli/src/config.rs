//! Bot configuration, loaded from environment variables.

use anyhow::Result;
use std::env;

/// Runtime configuration for the tracking bot.
pub struct BotConfig {
    pub bot_token: String,
    pub telemetree_project_id: String,
    pub telemetree_api_key: String,
    /// Optional override of the Telemetree configuration endpoint (used by tests to
    /// point at a mock server).
    pub telemetree_config_url: Option<String>,
    /// Optional Telegram Bot API base URL override.
    /// Environment variables: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads configuration from the environment. The bot token and Telemetree
    /// credentials are passed through even when missing (empty string): bad values
    /// surface as initialization or transport failures, not as local validation.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_BOT_TOKEN").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .unwrap_or_default();
        let telemetree_project_id = env::var("TELEMETREE_PROJECT_ID").unwrap_or_default();
        let telemetree_api_key = env::var("TELEMETREE_API_KEY").unwrap_or_default();
        let telemetree_config_url = env::var("TELEMETREE_CONFIG_URL").ok();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();

        Ok(Self {
            bot_token,
            telemetree_project_id,
            telemetree_api_key,
            telemetree_config_url,
            telegram_api_url,
            log_file,
        })
    }
}
