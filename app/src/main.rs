//! Milano open mic map
//!
//! Entry point for the web front end. Wires the shared state (data loader,
//! selection coordinator, table state, language) into context, kicks off the
//! initial sheet fetch, and lays out the page: navigation bar, map + table,
//! Q&A cards.

use dioxus::prelude::*;

mod components;
mod constants;
mod i18n;
mod sheets;
mod utils;

use components::{NavigationBar, TableAndMap};
use i18n::{Language, tr};
use openmic_core::{DataLoader, SelectionCoordinator, TableState};

const STYLES: Asset = asset!("/assets/styles.css");

fn main() {
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let loader = use_context_provider(|| Signal::new(DataLoader::new()));
    let selection = use_context_provider(|| Signal::new(SelectionCoordinator::new()));
    use_context_provider(|| Signal::new(TableState::new()));
    use_context_provider(|| Signal::new(i18n::initial_language()));

    // One fetch per load cycle; a failed or empty fetch resolves to the
    // sample dataset inside the loader, never to an error screen.
    use_future(move || sheets::load_into(loader, selection));

    rsx! {
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" }
        document::Stylesheet { href: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" }
        document::Script { src: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" }
        document::Stylesheet { href: STYLES }

        NavigationBar {}
        TableAndMap {}
        QnaSection {}
    }
}

/// Q&A cards under the table, matching the legacy landing page.
#[component]
fn QnaSection() -> Element {
    let language = use_context::<Signal<Language>>();
    let lang = *language.read();

    let qna = [
        (
            "qna.contribute.question",
            "qna.contribute.answer",
            constants::GITHUB_URL.to_string(),
        ),
        (
            "qna.raw_data.question",
            "qna.raw_data.answer",
            constants::spreadsheet_url(),
        ),
        (
            "qna.credits.question",
            "qna.credits.answer",
            constants::ORIGINAL_PROJECT_URL.to_string(),
        ),
    ];

    rsx! {
        div { id: "qna", class: "section",
            div { class: "container",
                div { class: "columns is-vcentered",
                    for (question_key, answer_key, link) in qna {
                        div { class: "column", key: "{question_key}",
                            div { class: "card",
                                div { class: "card-header",
                                    div { class: "card-header-title", {tr(lang, question_key)} }
                                }
                                div { class: "card-content",
                                    div { class: "content",
                                        p {
                                            {tr(lang, answer_key)}
                                            " "
                                            a { href: "{link}", target: "_blank", "→" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
