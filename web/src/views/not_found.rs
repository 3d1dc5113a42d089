use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div style="min-height: 100vh; background: #242f3e; display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 480px; width: 100%; text-align: center; color: #d59563;">
                <div style="font-size: 6rem; font-weight: 900; line-height: 1; color: #E91E63;">
                    "404"
                </div>
                <h1 style="font-size: 1.75rem; font-weight: 700; margin: 1rem 0;">
                    "Page Not Found"
                </h1>
                <A href="/" attr:style="display: inline-block; background: #E91E63; color: white; padding: 0.75rem 1.5rem; border-radius: 12px; text-decoration: none; font-weight: 600;">
                    "Back to the map"
                </A>
            </div>
        </div>
    }
}
