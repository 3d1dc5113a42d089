use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{Coordinate, MotelResult};
use thaw::{Label, LabelSize};

use crate::views::map::util::directions_url;

/// The one details popup on the map, anchored at the selected motel.
///
/// It stays mounted while a motel is selected; choosing another marker only
/// moves the anchor and swaps the content. Leaflet's close button fires the
/// map's `popupclose`, which the renderer turns into a deselect.
#[component]
pub fn MapMarkerPopup(
    #[prop(into)] selected: Signal<Option<MotelResult>>,
    #[prop(into)] anchor: Signal<Option<Coordinate>>,
) -> impl IntoView {
    let field = move |get: fn(&MotelResult) -> String| {
        move || selected.with(|m| m.as_ref().map(get).unwrap_or_default())
    };

    let position = Signal::derive_local(move || {
        // Only mounted while something is selected.
        let at = anchor.get().unwrap_or(Coordinate::new(0.0, 0.0));
        Position::new(at.latitude, at.longitude)
    });

    let name = field(|m| m.name.clone());
    let address = field(|m| m.address.clone());
    let directions = field(|m| directions_url(&m.location));

    view! {
        <Popup position=position>
            <div class="info-window">
                <Label size=LabelSize::Large>{name}</Label>
                <p class="info-window__address">{address}</p>
                <a
                    class="info-window__directions"
                    href=directions
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Get directions"
                </a>
            </div>
        </Popup>
    }
}
