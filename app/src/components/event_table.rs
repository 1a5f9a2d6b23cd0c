//! Filterable event table
//!
//! One row per event, per-column filter controls in the header, and a column
//! picker. Row highlight derives from the selection coordinator, so a
//! selection arriving from the map lights up the same row a direct click
//! would — no cross-component DOM queries involved.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use openmic_core::{DataLoader, Filter, SelectionCoordinator, TableState, table};
use openmic_types::{ColumnId, Event, FilterKind};

use crate::i18n::{Language, tr};

#[component]
pub fn EventTable() -> Element {
    let loader = use_context::<Signal<DataLoader>>();
    let table_state = use_context::<Signal<TableState>>();
    let selection = use_context::<Signal<SelectionCoordinator>>();
    let language = use_context::<Signal<Language>>();
    let mut flash_row = use_signal(|| None::<u32>);

    let lang = *language.read();
    let events: Vec<Event> = loader.read().events().to_vec();
    let visible_cols = table_state.read().visible_columns();
    let visible_rows = table_state.read().visible_rows(&events);
    let column_count = visible_cols.len();

    // Bring the selected row into view and flash it briefly, the way the
    // legacy site did when a map marker was clicked.
    use_effect(move || {
        let Some(row) = selection.read().current() else {
            return;
        };
        flash_row.set(Some(row));
        spawn(async move {
            TimeoutFuture::new(2_000).await;
            if *flash_row.peek() == Some(row) {
                flash_row.set(None);
            }
        });
        scroll_row_into_view(row);
    });

    rsx! {
        ColumnPicker {}

        table { class: "table is-hoverable is-fullwidth",
            thead {
                tr {
                    for col in visible_cols.iter().copied() {
                        th { key: "{col:?}",
                            {tr(lang, col.label_key())}
                            div {
                                match col.filter_kind() {
                                    FilterKind::Search => rsx! { SearchFilter { col } },
                                    FilterKind::Select => rsx! { SelectFilter { col } },
                                    FilterKind::None => rsx! {},
                                }
                            }
                        }
                    }
                }
            }
            tbody {
                if visible_rows.is_empty() {
                    tr {
                        td { colspan: "{column_count}", class: "has-text-centered",
                            {tr(lang, "table.no_results")}
                        }
                    }
                } else {
                    for i in visible_rows {
                        EventRow {
                            key: "{events[i].row_number}",
                            event: events[i].clone(),
                            columns: visible_cols.clone(),
                            flash_row,
                        }
                    }
                }
            }
        }
    }
}

fn scroll_row_into_view(row_number: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(&format!("event-row-{row_number}")) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Column picker
// ─────────────────────────────────────────────────────────────────────────────

#[component]
fn ColumnPicker() -> Element {
    let mut table_state = use_context::<Signal<TableState>>();
    let language = use_context::<Signal<Language>>();
    let mut open = use_signal(|| false);
    let lang = *language.read();

    rsx! {
        div {
            id: "table-dropdown",
            class: if *open.read() { "dropdown is-active" } else { "dropdown" },
            div { class: "dropdown-trigger",
                button {
                    class: "button",
                    onclick: move |_| {
                        let toggled = !*open.peek();
                        open.set(toggled);
                    },
                    {tr(lang, "table.select_columns")}
                }
            }
            div { class: "dropdown-menu", role: "menu",
                for col in ColumnId::all().iter().copied() {
                    div { key: "{col:?}", class: "dropdown-content",
                        label { class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: !table_state.read().is_hidden(col),
                                onchange: move |_| table_state.write().toggle_column(col),
                            }
                            {column_picker_label(lang, col)}
                        }
                    }
                }
            }
        }
    }
}

/// Picker label: localized column name, or the raw header for icon columns.
fn column_picker_label(lang: Language, col: ColumnId) -> &'static str {
    let label = tr(lang, col.label_key());
    if label.is_empty() { col.header() } else { label }
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter controls
// ─────────────────────────────────────────────────────────────────────────────

#[component]
fn SearchFilter(col: ColumnId) -> Element {
    let mut table_state = use_context::<Signal<TableState>>();
    let value = match table_state.read().filter(col) {
        Some(Filter::Search(text)) => text.clone(),
        _ => String::new(),
    };

    rsx! {
        input {
            class: "input is-small",
            r#type: "text",
            value: "{value}",
            oninput: move |evt| table_state.write().set_search(col, evt.value()),
        }
    }
}

#[component]
fn SelectFilter(col: ColumnId) -> Element {
    let loader = use_context::<Signal<DataLoader>>();
    let mut table_state = use_context::<Signal<TableState>>();
    let language = use_context::<Signal<Language>>();
    let lang = *language.read();

    // Options come from the values observed in the loaded dataset
    let options = table::distinct_values(col, loader.read().events());
    let current = match table_state.read().filter(col) {
        Some(Filter::Select(value)) => value.clone(),
        _ => String::new(),
    };

    rsx! {
        select {
            class: "select is-small",
            value: "{current}",
            onchange: move |evt| {
                let value = evt.value();
                let value = if value.is_empty() { None } else { Some(value) };
                table_state.write().set_select(col, value);
            },
            option { value: "", {tr(lang, "table.all_option")} }
            for opt in options {
                option { key: "{opt}", value: "{opt}", "{opt}" }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rows and cells
// ─────────────────────────────────────────────────────────────────────────────

#[component]
fn EventRow(event: Event, columns: Vec<ColumnId>, flash_row: Signal<Option<u32>>) -> Element {
    let mut selection = use_context::<Signal<SelectionCoordinator>>();
    let row = event.row_number;
    let selected = selection.read().is_selected(row);
    let flashing = *flash_row.read() == Some(row);

    let class = if selected {
        "event-row is-selected"
    } else if flashing {
        "event-row row-flash"
    } else {
        "event-row"
    };

    rsx! {
        tr {
            id: "event-row-{row}",
            class: "{class}",
            onclick: move |_| selection.write().select(row),
            for col in columns.iter().copied() {
                EventCell { key: "{col:?}", event: event.clone(), col }
            }
        }
    }
}

#[component]
fn EventCell(event: Event, col: ColumnId) -> Element {
    match col {
        ColumnId::EditLink => rsx! {
            td {
                if !event.update_info_form_link.is_empty() {
                    a { href: "{event.update_info_form_link}", target: "_blank",
                        onclick: |evt| evt.stop_propagation(),
                        "✏️"
                    }
                }
            }
        },
        ColumnId::Links => rsx! {
            td { class: "links-cell",
                ContactLink { href: event.instagram.clone(), glyph: "📷" }
                ContactLink { href: event.facebook_page.clone(), glyph: "👥" }
                ContactLink { href: event.whatsapp.clone(), glyph: "💬" }
                ContactLink { href: event.gform.clone(), glyph: "📋" }
                ContactLink { href: email_href(&event), glyph: "✉️" }
            }
        },
        ColumnId::Name => rsx! {
            td { b { i { "{event.name}" } } }
        },
        ColumnId::FacebookGroup => rsx! {
            td {
                if !event.facebook_group.is_empty() {
                    a { href: "{event.facebook_group}", target: "_blank",
                        onclick: |evt| evt.stop_propagation(),
                        "{event.facebook_group}"
                    }
                }
            }
        },
        ColumnId::Website => rsx! {
            td {
                if !event.website.is_empty() {
                    a { href: "{event.website}", target: "_blank",
                        onclick: |evt| evt.stop_propagation(),
                        "{event.website}"
                    }
                }
            }
        },
        _ => rsx! {
            td { "{event.field(col)}" }
        },
    }
}

#[component]
fn ContactLink(href: String, glyph: &'static str) -> Element {
    rsx! {
        if !href.is_empty() {
            a { href: "{href}", target: "_blank",
                onclick: |evt| evt.stop_propagation(),
                "{glyph}"
            }
        }
    }
}

/// Mail link with a subject line localized per the event's own language,
/// matching the legacy site's behavior for Italian-speaking organizers.
fn email_href(event: &Event) -> String {
    if event.email.is_empty() {
        return String::new();
    }
    let venue = event.venue.replace(' ', "%20");
    if event.language == "Italian" {
        format!("mailto:{}?subject=Iscrizione%20open%20mic%20{venue}", event.email)
    } else {
        format!("mailto:{}?subject=Sign%20up%20to%20open%20mic%20{venue}", event.email)
    }
}
