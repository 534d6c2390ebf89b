use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use warden_core::config::WardenConfig;
use warden_moderation::BannedLexicon;
use warden_search::SearchClient;
use warden_telegram::TelegramAdapter;

mod keepalive;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warden=info,warden_bot=info".into()),
        )
        .init();

    // load config: explicit path > WARDEN_CONFIG env > ~/.warden/warden.toml
    let config_path = std::env::var("WARDEN_CONFIG").ok();
    let config = WardenConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
        warn!("config load failed ({e}), using defaults");
        WardenConfig::default()
    });

    // The bot token comes from the process environment only; a missing token
    // is a fatal startup error.
    let token = std::env::var("BOT_TOKEN")
        .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set — export it before starting the bot"))?;

    let lexicon = Arc::new(BannedLexicon::new(&config.moderation.banned_words));
    if lexicon.is_empty() {
        warn!("banned-word lexicon is empty — moderation will never trigger");
    } else {
        info!(terms = lexicon.len(), "banned-word lexicon loaded");
    }

    let search = config.search.api_key.clone().map(|key| {
        SearchClient::new(
            key,
            Some(config.search.base_url.clone()),
            config.search.max_results,
        )
    });
    if search.is_none() {
        info!("no search API key configured — /search disabled");
    }

    if config.keepalive.enabled {
        let keepalive_config = config.keepalive.clone();
        tokio::spawn(async move {
            if let Err(e) = keepalive::serve(&keepalive_config).await {
                warn!(error = %e, "keep-alive server exited");
            }
        });
    }

    let adapter = TelegramAdapter::new(
        &token,
        lexicon,
        Duration::from_secs(config.moderation.warning_ttl_secs),
        search,
    );
    adapter.run().await;

    Ok(())
}
