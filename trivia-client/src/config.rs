use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use trivia_core::GameSettings;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub total_turns: u32,
    pub next_image_delay_ms: u64,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_base_url: env::var("TRIVIA_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            total_turns: env::var("TOTAL_TURNS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .expect("Invalid TOTAL_TURNS"),
            next_image_delay_ms: env::var("NEXT_IMAGE_DELAY_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .expect("Invalid NEXT_IMAGE_DELAY_MS"),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("Invalid REQUEST_TIMEOUT_SECONDS"),
        }
    }

    /// The backend origin as a base URL that endpoint and image paths join onto.
    pub fn api_url(&self) -> anyhow::Result<Url> {
        parse_base_url(&self.api_base_url)
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            total_turns: self.total_turns,
            next_image_delay: Duration::from_millis(self.next_image_delay_ms),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an http(s) base URL. The path always ends in `/` so relative joins
/// keep any prefix the backend is mounted under.
pub fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
    let mut url =
        Url::parse(raw.trim()).with_context(|| format!("Invalid base URL '{}'", raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Base URL '{}' must use http or https, not '{}'",
            raw,
            url.scheme()
        );
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
