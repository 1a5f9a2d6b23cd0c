//! Map + table layout
//!
//! Shows the loading affordance while a cycle is in flight, then the
//! side-by-side map and table. The reload button starts a fresh load cycle;
//! the generation tag makes the superseded fetch a no-op when it lands.

use dioxus::prelude::*;

use openmic_core::{DataLoader, SelectionCoordinator};

use crate::components::{EventTable, MapView};
use crate::i18n::{Language, tr};
use crate::sheets;

#[component]
pub fn TableAndMap() -> Element {
    let mut loader = use_context::<Signal<DataLoader>>();
    let selection = use_context::<Signal<SelectionCoordinator>>();
    let language = use_context::<Signal<Language>>();
    let lang = *language.read();

    if loader.read().is_loading() {
        return rsx! {
            div { class: "section has-text-centered",
                p { class: "title is-5", {tr(lang, "table.loading")} }
                p { class: "subtitle is-6", {tr(lang, "table.loading_details")} }
                progress { class: "progress is-small is-link loading-bar", max: "100" }
                button {
                    class: "button is-link is-light",
                    onclick: move |_| {
                        loader.write().reload();
                        spawn(sheets::load_into(loader, selection));
                    },
                    {tr(lang, "table.reload")}
                }
            }
        };
    }

    rsx! {
        div { class: "columns is-multiline",
            span { class: "map column is-12-mobile is-5-desktop", MapView {} }
            span { class: "table_wrapper column is-12-mobile is-7-desktop", EventTable {} }
        }
    }
}
