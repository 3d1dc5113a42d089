use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

use crate::components::navbar::APP_NAME;

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="error-container">
            <MessageBar intent=MessageBarIntent::Error>
                {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
            </MessageBar>
        </div>
    }
}

/// Fail-stop screen behind the failure alert; carries no message of its own.
#[component]
pub fn StoppedView() -> impl IntoView {
    view! {
        <div class="loading-container">
            <h1 class="loading-brand">{APP_NAME}</h1>
        </div>
    }
}

/// Blocks on a browser alert carrying `message`.
pub fn notify_failure(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            leptos::logging::warn!("Could not show alert: {}", message);
        }
    }
}
