use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[cfg(feature = "ssr")]
use std::sync::OnceLock;

pub const DEFAULT_TILE_URL: &str =
    "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>";
pub const DEFAULT_ZOOM: f64 = 14.0;

const ACCESS_TOKEN_PLACEHOLDER: &str = "{accessToken}";

/// Settings the browser needs to run a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Tile URL template with the access token already filled in.
    pub tile_url: String,
    pub tile_attribution: String,
    pub zoom: f64,
}

impl ClientConfig {
    /// Builds the config from a variable lookup, validating as it goes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("MOTELS_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("MOTELS_API_URL"))?;
        Url::parse(&api_base_url).map_err(|e| ConfigError::InvalidUrl {
            var: "MOTELS_API_URL",
            reason: e.to_string(),
        })?;

        let mut tile_url = lookup("MAP_TILE_URL").unwrap_or_else(|| DEFAULT_TILE_URL.to_string());
        if tile_url.contains(ACCESS_TOKEN_PLACEHOLDER) {
            let token = lookup("MAP_ACCESS_TOKEN")
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing("MAP_ACCESS_TOKEN"))?;
            tile_url = tile_url.replace(ACCESS_TOKEN_PLACEHOLDER, &token);
        }

        let tile_attribution = lookup("MAP_TILE_ATTRIBUTION")
            .unwrap_or_else(|| DEFAULT_TILE_ATTRIBUTION.to_string());

        Ok(Self {
            api_base_url,
            tile_url,
            tile_attribution,
            zoom: DEFAULT_ZOOM,
        })
    }

    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(feature = "ssr")]
static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

#[cfg(feature = "ssr")]
pub fn init_config() -> Result<&'static ClientConfig, ConfigError> {
    let config = ClientConfig::from_env()?;
    tracing::info!(
        api_base_url = %config.api_base_url,
        "Loaded client configuration"
    );
    Ok(CONFIG.get_or_init(|| config))
}

#[cfg(feature = "ssr")]
pub fn get_config() -> Option<&'static ClientConfig> {
    CONFIG.get()
}
