//! Leaflet map component
//!
//! Treats Leaflet as a black-box widget reached through wasm-bindgen: the
//! component hands it a center, a zoom level, and one marker per plottable
//! event, and listens for marker clicks. Which popup is open is *derived*
//! from the selection coordinator, never tracked locally, so the map cannot
//! disagree with the table about what is selected.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;

use openmic_core::{DataLoader, SelectionCoordinator};
use openmic_types::{Event, EventStatus};

use crate::constants::{MAP_CENTER, MAP_ZOOM, TILE_ATTRIBUTION, TILE_URL};
use crate::i18n::{Language, tr};
use crate::utils::{js_call0, js_call1, js_call2, js_set};

// ─────────────────────────────────────────────────────────────────────────────
// Leaflet bindings
// ─────────────────────────────────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn leaflet_tile_layer(url_template: &str, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(latlng: &JsValue, options: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = L, js_name = latLng)]
    fn leaflet_lat_lng(lat: f64, lng: f64) -> JsValue;
}

/// The Leaflet global arrives from a CDN script tag; it may land after us.
fn leaflet_loaded() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("L")).unwrap_or(false))
        .unwrap_or(false)
}

/// One plotted marker plus the closures keeping its JS callbacks alive.
///
/// Markers are removed from the map before the handle drops, so Leaflet can
/// never fire a callback into a freed closure.
struct MarkerHandle {
    row_number: u32,
    marker: JsValue,
    _on_click: Closure<dyn FnMut()>,
    _on_popup_close: Closure<dyn FnMut()>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Component
// ─────────────────────────────────────────────────────────────────────────────

#[component]
pub fn MapView() -> Element {
    let loader = use_context::<Signal<DataLoader>>();
    let selection = use_context::<Signal<SelectionCoordinator>>();
    let language = use_context::<Signal<Language>>();
    let mut map = use_signal(|| None::<JsValue>);
    let mut markers = use_signal(Vec::<MarkerHandle>::new);

    // Init once the container is in the DOM and the Leaflet script is loaded.
    let on_mounted = move |_| {
        spawn(async move {
            while !leaflet_loaded() {
                TimeoutFuture::new(100).await;
            }
            if map.peek().is_some() {
                return;
            }
            let instance = leaflet_map("map");
            let center = leaflet_lat_lng(MAP_CENTER.0, MAP_CENTER.1);
            js_call2(&instance, "setView", &center, &JsValue::from_f64(MAP_ZOOM));

            let tile_options = js_sys::Object::new();
            js_set(&tile_options, "attribution", &JsValue::from_str(TILE_ATTRIBUTION));
            let tiles = leaflet_tile_layer(TILE_URL, &tile_options);
            js_call1(&tiles, "addTo", &instance);

            map.set(Some(instance));
        });
    };

    // Rebuild markers whenever the dataset, language, or map instance changes.
    use_effect(move || {
        let events: Vec<Event> = loader.read().events().to_vec();
        let lang = *language.read();
        let instance = match &*map.read() {
            Some(instance) => instance.clone(),
            None => return,
        };

        for handle in markers.write().drain(..) {
            js_call0(&handle.marker, "remove");
        }

        let built: Vec<MarkerHandle> = events
            .iter()
            .filter_map(|event| build_marker(&instance, event, lang, selection))
            .collect();
        markers.set(built);
    });

    // Popups derive from the coordinator: exactly the selected marker's popup
    // is open, regardless of whether the selection came from a marker click
    // or a table row.
    use_effect(move || {
        let open = {
            let plotted: Vec<u32> = markers.read().iter().map(|h| h.row_number).collect();
            selection.read().open_popup(&plotted)
        };
        for handle in markers.read().iter() {
            if Some(handle.row_number) == open {
                js_call0(&handle.marker, "openPopup");
            } else {
                js_call0(&handle.marker, "closePopup");
            }
        }
    });

    rsx! {
        div { id: "map", class: "map-canvas", onmounted: on_mounted }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Markers
// ─────────────────────────────────────────────────────────────────────────────

fn build_marker(
    instance: &JsValue,
    event: &Event,
    lang: Language,
    mut selection: Signal<SelectionCoordinator>,
) -> Option<MarkerHandle> {
    let (lat, lng) = event.coords()?;
    let row = event.row_number;

    let options = js_sys::Object::new();
    js_set(&options, "title", &JsValue::from_str(&event.name));
    let marker = leaflet_marker(&leaflet_lat_lng(lat, lng), &options);
    if event.status == EventStatus::Inactive {
        js_call1(&marker, "setOpacity", &JsValue::from_f64(0.6));
    }
    js_call1(&marker, "addTo", instance);
    js_call1(&marker, "bindPopup", &JsValue::from_str(&popup_html(event, lang)));

    // bindPopup installs Leaflet's own click -> togglePopup handler, which
    // would fire before ours and fight the derived-popup effect (its close
    // clears the selection, then our click re-selects). Detach it; the
    // coordinator owns the toggle and the effect does all opening/closing.
    js_call1(&marker, "off", &JsValue::from_str("click"));

    let on_click = Closure::<dyn FnMut()>::new(move || {
        selection.write().select(row);
    });
    js_call2(&marker, "on", &JsValue::from_str("click"), on_click.as_ref());

    // Fires for the ✕ button and for programmatic closes of superseded
    // popups. Only the still-selected row may clear the selection, so a
    // close caused by selecting another marker is a no-op.
    let on_popup_close = Closure::<dyn FnMut()>::new(move || {
        let mut sel = selection.write();
        if sel.is_selected(row) {
            sel.clear();
        }
    });
    js_call2(
        &marker,
        "on",
        &JsValue::from_str("popupclose"),
        on_popup_close.as_ref(),
    );

    Some(MarkerHandle {
        row_number: row,
        marker,
        _on_click: on_click,
        _on_popup_close: on_popup_close,
    })
}

/// Popup body: name, schedule line, and an inactive badge when relevant.
fn popup_html(event: &Event, lang: Language) -> String {
    let mut html = format!(
        "<div class=\"popup-name\">{}</div><div class=\"popup-details\">{} at {}</div>",
        escape_html(&event.name),
        escape_html(&event.weekday),
        escape_html(&event.address),
    );
    if event.status == EventStatus::Inactive {
        html.push_str(&format!(
            "<div class=\"popup-inactive\">{}</div>",
            tr(lang, "map.inactive")
        ));
    }
    html
}

/// Spreadsheet text goes into popup HTML; keep markup out of it.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
