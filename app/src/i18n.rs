//! Localized display strings
//!
//! Views consume display strings by key only. The chosen language is the one
//! piece of persisted state the app keeps, stored under a single
//! localStorage key.

use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    It,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::It]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::It => "it",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "it" => Some(Language::It),
            _ => None,
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::It => "🇮🇹",
        }
    }

    /// i18n key for this language's own display name.
    pub fn label_key(&self) -> &'static str {
        match self {
            Language::En => "lang.en",
            Language::It => "lang.it",
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored preference, else browser language prefix, else English.
pub fn initial_language() -> Language {
    if let Some(storage) = local_storage()
        && let Ok(Some(saved)) = storage.get_item(STORAGE_KEY)
        && let Some(lang) = Language::from_code(&saved)
    {
        return lang;
    }

    let browser = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_default();
    let prefix = browser.split('-').next().unwrap_or("");
    Language::from_code(prefix).unwrap_or_default()
}

/// Persist the language preference. Best effort; private browsing may refuse.
pub fn set_language(lang: Language) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY, lang.code());
    }
}

/// Look up a display string. Unknown keys render as empty text.
pub fn tr(lang: Language, key: &str) -> &'static str {
    let text = match lang {
        Language::En => tr_en(key),
        Language::It => tr_it(key),
    };
    if text.is_empty() && !key.is_empty() {
        tracing::debug!(key, "missing translation");
    }
    text
}

fn tr_en(key: &str) -> &'static str {
    match key {
        "nav.title" => "Milan Stand-up Comedy Map",
        "nav.subtitle" => "Perform comedy near you",
        "nav.submit_event" => "🎤 Submit an open mic night",
        "nav.faq" => "❓ F.A.Q.",
        "nav.contact" => "📣 Contact me for feedback!",
        "table.no_results" => "No events match your current filters",
        "table.select_columns" => "Select columns 🔽",
        "table.loading" => "Loading open mic events...",
        "table.loading_details" => {
            "Fetching data from Google Sheets. If this message persists for more than \
             30 seconds, there may be an issue with the data connection."
        }
        "table.reload" => "Reload Page",
        "table.all_option" => "All",
        "map.inactive" => "Inactive",
        "column.name" => "Name",
        "column.address" => "Address",
        "column.weekday" => "Weekday",
        "column.status" => "Status",
        "column.venue" => "Venue",
        "column.time" => "Time",
        "column.language" => "Language",
        "column.level" => "Level",
        "column.frequency" => "Frequency",
        "column.description" => "Description",
        "column.organizer_name" => "Organizer Name",
        "column.category" => "Category",
        "column.sub_category" => "Sub Category",
        "column.audience_entry_fee" => "Audience Entry Fee",
        "column.wheelchair_access" => "Wheelchair Access",
        "column.how_to_book" => "How To Book",
        "column.facebook_group" => "Facebook Group",
        "column.website" => "Website",
        "lang.en" => "English",
        "lang.it" => "Italiano",
        "qna.contribute.question" => "Found a bug? Wanna contribute?",
        "qna.contribute.answer" => "Here's our Git repo! Take a look at my code!",
        "qna.raw_data.question" => "How can I view the raw data of the app?",
        "qna.raw_data.answer" => "Head to the Google Sheet.",
        "qna.credits.question" => "Credits",
        "qna.credits.answer" => {
            "Many thanks to the original project London Standup Comedy Map and to the \
             awesome Apu Chitnis for sharing it."
        }
        _ => "",
    }
}

fn tr_it(key: &str) -> &'static str {
    match key {
        "nav.title" => "Mappa Open Mic Milano",
        "nav.subtitle" => "Dove fare stand-up comedy",
        "nav.submit_event" => "🎤 Segnala un open mic",
        "nav.faq" => "❓ F.A.Q.",
        "nav.contact" => "📣 Contattami per feedback!",
        "table.no_results" => "Nessun evento corrisponde ai filtri selezionati",
        "table.select_columns" => "Seleziona colonne 🔽",
        "table.loading" => "Caricamento eventi open mic...",
        "table.loading_details" => {
            "Recupero dati da Google Sheets. Se questo messaggio persiste per più di \
             30 secondi, potrebbe esserci un problema con la connessione ai dati."
        }
        "table.reload" => "Ricarica Pagina",
        "table.all_option" => "Tutti",
        "map.inactive" => "Inattivo",
        "column.name" => "Nome",
        "column.address" => "Indirizzo",
        "column.weekday" => "Giorno",
        "column.status" => "Stato",
        "column.venue" => "Locale",
        "column.time" => "Orario",
        "column.language" => "Lingua",
        "column.level" => "Livello",
        "column.frequency" => "Frequenza",
        "column.description" => "Descrizione",
        "column.organizer_name" => "Nome Organizzatore",
        "column.category" => "Categoria",
        "column.sub_category" => "Sottocategoria",
        "column.audience_entry_fee" => "Costo Ingresso",
        "column.wheelchair_access" => "Accesso Disabili",
        "column.how_to_book" => "Come Prenotare",
        "column.facebook_group" => "Gruppo Facebook",
        "column.website" => "Sito Web",
        "lang.en" => "English",
        "lang.it" => "Italiano",
        "qna.contribute.question" => "Hai trovato un bug? Vuoi contribuire?",
        "qna.contribute.answer" => "Ecco la nostra repository Git! Dai un'occhiata al mio codice!",
        "qna.raw_data.question" => "Come posso vedere i dati grezzi dell'app?",
        "qna.raw_data.answer" => "Vai al Google Sheet.",
        "qna.credits.question" => "Crediti",
        "qna.credits.answer" => {
            "Grazie mille al progetto originale London Standup Comedy Map e allo \
             straordinario Apu Chitnis per averlo condiviso."
        }
        _ => "",
    }
}
