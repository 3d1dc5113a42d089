use crate::views::map::util::{MOTEL_PIN_ANCHOR, MOTEL_PIN_ICON, MOTEL_PIN_SIZE};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::MotelResult;

/// Motel pin; a click reports the motel id.
#[component]
pub fn MapMarker(motel: MotelResult, on_select: Callback<String>) -> impl IntoView {
    let position = Position::new(motel.location.latitude, motel.location.longitude);
    let id = motel.id;
    let mouse_events = MouseEvents::new().on_click(move |_| on_select.run(id.clone()));

    view! {
        <Marker
            position=position
            draggable=false
            icon_url=Some(MOTEL_PIN_ICON.to_string())
            icon_size=Some(MOTEL_PIN_SIZE)
            icon_anchor=Some(MOTEL_PIN_ANCHOR)
            mouse_events=mouse_events
        />
    }
}
