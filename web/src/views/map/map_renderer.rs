use crate::{
    config::ClientConfig,
    views::map::{map_marker::MapMarker, map_marker_popup::MapMarkerPopup},
};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{Coordinate, MotelResult};

#[component]
pub fn MapRenderer(
    config: ClientConfig,
    origin: Coordinate,
    motels: Vec<MotelResult>,
    #[prop(into)] selected: Signal<Option<MotelResult>>,
    #[prop(into)] anchor: Signal<Option<Coordinate>>,
    on_select: Callback<String>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let center = Position::new(origin.latitude, origin.longitude);
    leptos::logging::log!("Rendering {} markers", motels.len());

    // Leaflet also fires this when the popup is taken off the map.
    let popup_events = PopupEvents::new().on_popup_close(move |_| on_dismiss.run(()));

    view! {
        <div class="map-renderer-container">
            <MapContainer
                class="map-renderer-map-container"
                center=center
                zoom=config.zoom
                set_view=true
                popup_events=popup_events
            >
                <TileLayer url=config.tile_url attribution=config.tile_attribution />

                // The user's own position, default leaflet icon.
                <Marker position=Position::new(origin.latitude, origin.longitude) draggable=false />

                {motels.into_iter().map(|motel| {
                    view! { <MapMarker motel=motel on_select=on_select /> }
                }).collect_view()}

                <Show when=move || selected.with(Option::is_some)>
                    <MapMarkerPopup selected=selected anchor=anchor />
                </Show>
            </MapContainer>
        </div>
    }
}
