use leptos::prelude::*;

pub const APP_NAME: &str = "ahoraiTELO";

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <h1 class="navbar__brand">{APP_NAME}</h1>
            </div>
        </nav>
    }
}
