use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `gallery` starts with `exposants.json`.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_path: String,
    pub photo_prefix: String,
    pub placeholder_photo: String,
    pub port: u16,
    pub rust_log: String,
    /// Card base width unit (`cw`) used when the client does not report one.
    pub card_width_px: f32,
    /// Height of the bio box on a card.
    pub bio_box_height_px: f32,
    pub transition_timeout: Duration,
    pub resize_debounce: Duration,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            feed_path: env_or("FEED_PATH", "exposants.json"),
            photo_prefix: env_or("PHOTO_PREFIX", "photo_exposant/"),
            placeholder_photo: env_or("PLACEHOLDER_PHOTO", "placeholder.jpg"),
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
            card_width_px: parse_env("CARD_WIDTH_PX", 260.0)?,
            bio_box_height_px: parse_env("BIO_BOX_HEIGHT_PX", 120.0)?,
            transition_timeout: Duration::from_millis(parse_env("TRANSITION_TIMEOUT_MS", 1500)?),
            resize_debounce: Duration::from_millis(parse_env("RESIZE_DEBOUNCE_MS", 150)?),
            session_ttl: Duration::from_secs(parse_env("SESSION_TTL_SECS", 3600)?),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_path: "exposants.json".to_string(),
            photo_prefix: "photo_exposant/".to_string(),
            placeholder_photo: "placeholder.jpg".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            card_width_px: 260.0,
            bio_box_height_px: 120.0,
            transition_timeout: Duration::from_millis(1500),
            resize_debounce: Duration::from_millis(150),
            session_ttl: Duration::from_secs(3600),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => Ok(default),
    }
}
