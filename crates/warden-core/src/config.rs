use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// How long a posted warning notice lives before it is retracted.
pub const DEFAULT_WARNING_TTL_SECS: u64 = 10;
/// Port the keep-alive HTTP server binds (hosting platforms ping it).
pub const DEFAULT_KEEPALIVE_PORT: u16 = 10000;
pub const DEFAULT_KEEPALIVE_BIND: &str = "0.0.0.0";
/// Result cards posted per /search invocation.
pub const DEFAULT_MAX_RESULTS: u8 = 5;

/// Top-level config (warden.toml + WARDEN_* env overrides).
///
/// The Telegram bot token is deliberately NOT part of this file — it is read
/// from the `BOT_TOKEN` environment variable at startup and its absence is a
/// fatal error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WardenConfig {
    #[serde(default)]
    pub moderation: ModerationConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub keepalive: KeepaliveConfig,
}

/// Banned-content policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationConfig {
    /// Static banned-term list. Matching is case-insensitive substring
    /// containment — no word boundaries. Terms are lowercased at startup.
    #[serde(default = "default_banned_words")]
    pub banned_words: Vec<String>,
    /// Seconds before a posted warning notice is deleted again.
    #[serde(default = "default_warning_ttl_secs")]
    pub warning_ttl_secs: u64,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            banned_words: default_banned_words(),
            warning_ttl_secs: default_warning_ttl_secs(),
        }
    }
}

/// YouTube lookup settings for the /search command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// YouTube Data API v3 key. When unset the /search command is disabled.
    pub api_key: Option<String>,
    #[serde(default = "default_search_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_results")]
    pub max_results: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_search_base_url(),
            max_results: default_max_results(),
        }
    }
}

/// Keep-alive HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeepaliveConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    #[serde(default = "default_keepalive_bind")]
    pub bind: String,
    #[serde(default = "default_keepalive_port")]
    pub port: u16,
}

impl Default for KeepaliveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind: default_keepalive_bind(),
            port: default_keepalive_port(),
        }
    }
}

fn bool_true() -> bool {
    true
}
fn default_warning_ttl_secs() -> u64 {
    DEFAULT_WARNING_TTL_SECS
}
fn default_keepalive_port() -> u16 {
    DEFAULT_KEEPALIVE_PORT
}
fn default_keepalive_bind() -> String {
    DEFAULT_KEEPALIVE_BIND.to_string()
}
fn default_search_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}
fn default_max_results() -> u8 {
    DEFAULT_MAX_RESULTS
}
fn default_banned_words() -> Vec<String> {
    ["spam", "scam", "casino", "porn", "free money"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl WardenConfig {
    /// Load config from a TOML file with WARDEN_* env var overrides.
    ///
    /// Checks in order:
    ///   1. Explicit path argument
    ///   2. ~/.warden/warden.toml
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: WardenConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("WARDEN_").split("_"))
            .extract()
            .map_err(|e| crate::error::WardenError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.warden/warden.toml", home)
}
