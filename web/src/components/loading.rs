use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

use crate::components::navbar::APP_NAME;

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <h1 class="loading-brand">{APP_NAME}</h1>
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading, please wait...".to_string())}
            </p>
        </div>
    }
}
