//! Backend address and UI timing
//!
//! Defaults target the local development backend. A TOML document in the
//! `ADMIN_API_CONFIG` env var, or a bare URL in `ADMIN_API_BASE_URL`, overrides
//! them at build time (there is no filesystem to read from in the browser).

use once_cell::sync::Lazy;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SUCCESS_CLOSE_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// How long the success message stays visible before a create dialog closes
    pub success_close_delay_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            success_close_delay_ms: DEFAULT_SUCCESS_CLOSE_DELAY_MS,
        }
    }
}

static CONFIG: Lazy<ApiConfig> = Lazy::new(|| {
    load_config(
        option_env!("ADMIN_API_CONFIG"),
        option_env!("ADMIN_API_BASE_URL"),
    )
});

/// Process-wide configuration, resolved on first use
pub fn api_config() -> &'static ApiConfig {
    &CONFIG
}

pub fn parse_config(src: &str) -> anyhow::Result<ApiConfig> {
    Ok(toml::from_str(src)?)
}

fn load_config(document: Option<&str>, base_url: Option<&str>) -> ApiConfig {
    let mut config = match document {
        Some(doc) => match parse_config(doc) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid ADMIN_API_CONFIG, using defaults: {}", e);
                ApiConfig::default()
            }
        },
        None => ApiConfig::default(),
    };

    if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.base_url = url.to_string();
    }

    config
}
