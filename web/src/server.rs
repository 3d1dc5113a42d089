use leptos::prelude::*;
use leptos::server;

use crate::config::ClientConfig;

/// Client settings loaded by the server at startup.
#[server]
pub async fn get_client_config() -> Result<ClientConfig, ServerFnError> {
    match crate::config::get_config() {
        Some(config) => Ok(config.clone()),
        None => Err(ServerFnError::new(
            "Configuration not initialized".to_string(),
        )),
    }
}
