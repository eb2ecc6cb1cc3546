use crate::whatsapp::DEFAULT_LINK_MARKER;
use anyhow::Result;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Persisted preference
    pub preference_file: String,

    // Startup
    pub init_delay: Duration,

    // Messaging links
    pub messaging_link_marker: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            preference_file: std::env::var("PREFERENCE_FILE")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),

            init_delay: Duration::from_millis(
                std::env::var("INIT_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(100),
            ),

            messaging_link_marker: std::env::var("MESSAGING_LINK_MARKER")
                .unwrap_or_else(|_| DEFAULT_LINK_MARKER.to_string()),
        })
    }
}
