//! Navigation bar and language switcher

use dioxus::prelude::*;

use crate::constants::{CONTACT_URL, GOOGLE_FORM_URL};
use crate::i18n::{self, Language, tr};

#[component]
pub fn NavigationBar() -> Element {
    let language = use_context::<Signal<Language>>();
    let lang = *language.read();

    rsx! {
        nav { class: "navbar is-light has-shadow py-2 mb-2",
            div { class: "navbar-brand",
                div { class: "navbar-item",
                    div { class: "title-subtitle-container",
                        p { class: "title is-4", {tr(lang, "nav.title")} }
                        p { class: "subtitle is-6", {tr(lang, "nav.subtitle")} }
                    }
                }
            }
            div { class: "navbar-menu is-active", id: "nav-links",
                div { class: "navbar-end",
                    div { class: "navbar-item", LanguageSwitcher {} }
                    a { class: "navbar-item", href: GOOGLE_FORM_URL, {tr(lang, "nav.submit_event")} }
                    a { class: "navbar-item", href: "#qna", {tr(lang, "nav.faq")} }
                    a { class: "navbar-item", href: CONTACT_URL, {tr(lang, "nav.contact")} }
                }
            }
        }
    }
}

#[component]
fn LanguageSwitcher() -> Element {
    let mut language = use_context::<Signal<Language>>();
    let mut open = use_signal(|| false);
    let current = *language.read();

    rsx! {
        div {
            class: if *open.read() { "dropdown is-active" } else { "dropdown" },
            div { class: "dropdown-trigger",
                button {
                    class: "button is-small",
                    onclick: move |_| {
                        let toggled = !*open.peek();
                        open.set(toggled);
                    },
                    span { class: "flag-icon", "{current.flag()}" }
                    span { class: "language-name", {tr(current, current.label_key())} }
                }
            }
            div { class: "dropdown-menu", role: "menu",
                div { class: "dropdown-content",
                    for lang in Language::all().iter().copied() {
                        a {
                            key: "{lang.code()}",
                            class: if lang == current { "dropdown-item is-active" } else { "dropdown-item" },
                            onclick: move |_| {
                                i18n::set_language(lang);
                                language.set(lang);
                                open.set(false);
                            },
                            span { class: "flag-icon", "{lang.flag()}" }
                            span { class: "language-name", {tr(current, lang.label_key())} }
                        }
                    }
                }
            }
        }
    }
}
