use leptos::{prelude::*, task::spawn_local};

use crate::{
    components::{notify_failure, ErrorView, LoadingView, Navbar, StoppedView},
    config::ClientConfig,
    geolocation::BrowserGeolocation,
    motels::HttpMotelBackend,
    server::get_client_config,
    session::{self, MotelFinder, ViewState},
    views::map::map_renderer::MapRenderer,
};

#[component]
pub fn MotelMap() -> impl IntoView {
    let config = Resource::new(|| (), |_| async move { get_client_config().await });

    view! {
        <Suspense fallback=|| view! {
            <LoadingView message=Some("Starting up...".to_string()) />
        }>
            {move ||
                match config.get() {
                    Some(Ok(config)) => view! { <MotelSession config=config /> }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::error!("Error loading configuration: {}", err);
                        view! {
                            <ErrorView message=Some("The app is not configured correctly.".to_string()) />
                        }.into_any()
                    }
                    None => view! {
                        <LoadingView message=Some("Starting up...".to_string()) />
                    }.into_any(),
                }
            }
        </Suspense>
    }
}

/// One location → fetch → map session.
#[component]
fn MotelSession(config: ClientConfig) -> impl IntoView {
    let finder = RwSignal::new(MotelFinder::new());
    let started = StoredValue::new(false);

    // Effects only run in the browser, so the session never starts during SSR.
    let api_base_url = config.api_base_url.clone();
    Effect::new(move |_| {
        if started.get_value() {
            return;
        }
        started.set_value(true);

        let backend = HttpMotelBackend::new(api_base_url.clone());
        spawn_local(async move {
            session::run(&BrowserGeolocation, &backend, move |event| {
                let failure = event.failure();
                finder.update(|f| {
                    if let Err(err) = f.apply(event) {
                        leptos::logging::warn!("Dropped session event: {}", err);
                    }
                });
                if let Some(err) = failure {
                    notify_failure(err.user_message());
                }
            })
            .await;
        });
    });

    let view_state = Memo::new(move |_| finder.with(MotelFinder::view_state));
    let selected = Signal::derive(move || finder.with(|f| f.selected().cloned()));
    let anchor = Signal::derive(move || finder.with(MotelFinder::popup_anchor));
    let on_select = Callback::new(move |id: String| {
        finder.update(|f| {
            f.select_id(&id);
        });
    });
    let on_dismiss = Callback::new(move |_: ()| {
        if finder.with_untracked(|f| f.selected().is_some()) {
            finder.update(MotelFinder::deselect);
        }
    });

    view! {
        {move || match view_state.get() {
            ViewState::Loading(message) => view! {
                <LoadingView message=Some(message.to_string()) />
            }.into_any(),
            // The alert raised on the failing event is the only notice.
            ViewState::Failed(_) => view! { <StoppedView /> }.into_any(),
            ViewState::Ready => {
                let snapshot = finder.with_untracked(|f| {
                    f.origin().zip(f.results().map(|results| results.to_vec()))
                });
                match snapshot {
                    Some((origin, motels)) => view! {
                        <div class="app-container">
                            <Navbar />
                            <MapRenderer
                                config=config.clone()
                                origin=origin
                                motels=motels
                                selected=selected
                                anchor=anchor
                                on_select=on_select
                                on_dismiss=on_dismiss
                            />
                        </div>
                    }.into_any(),
                    None => view! { <ErrorView message=None /> }.into_any(),
                }
            }
        }}
    }
}
