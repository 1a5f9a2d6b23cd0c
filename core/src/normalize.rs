//! Row normalization
//!
//! Converts raw spreadsheet rows into canonical [`Event`] records. The source
//! has shipped rows in two shapes over time: a header-keyed accessor (the
//! current API) and bare positional cells (the legacy one). [`SheetRow`]
//! carries both and [`RowAccessor::field`] papers over the difference, so the
//! normalizer itself never sees shape details.

use std::sync::Arc;

use hashbrown::HashMap;
use openmic_types::{Event, EventStatus};

/// Capability to read a row's cell text by spreadsheet header.
pub trait RowAccessor {
    /// Cell text for a header, if the row carries one.
    fn field(&self, header: &str) -> Option<&str>;

    /// Native zero-based row index within the sheet, if known.
    fn row_index(&self) -> Option<u32>;
}

/// One fetched spreadsheet row.
///
/// Holds a header-keyed map (primary accessor) and the raw positional cells
/// plus shared header list (fallback accessor). Either side may be absent
/// depending on which source shape produced the row.
#[derive(Debug, Clone, Default)]
pub struct SheetRow {
    keyed: HashMap<String, String>,
    headers: Arc<[String]>,
    cells: Vec<String>,
    index: Option<u32>,
}

impl SheetRow {
    /// Row from the header-keyed source shape.
    pub fn keyed(values: impl IntoIterator<Item = (String, String)>, index: Option<u32>) -> Self {
        Self {
            keyed: values.into_iter().collect(),
            headers: Arc::from([]),
            cells: Vec::new(),
            index,
        }
    }

    /// Row from the positional source shape.
    pub fn positional(headers: Arc<[String]>, cells: Vec<String>, index: Option<u32>) -> Self {
        Self {
            keyed: HashMap::new(),
            headers,
            cells,
            index,
        }
    }
}

impl RowAccessor for SheetRow {
    fn field(&self, header: &str) -> Option<&str> {
        if let Some(value) = self.keyed.get(header) {
            return Some(value.as_str());
        }
        // Fallback: positional lookup through the header list
        let pos = self.headers.iter().position(|h| h == header)?;
        self.cells.get(pos).map(String::as_str)
    }

    fn row_index(&self) -> Option<u32> {
        self.index
    }
}

/// Normalize one raw row into an [`Event`].
///
/// Returns `None` when the row's status is not a recognized listing status.
/// `fallback_row_number` is used as the identity when the source did not
/// report a native row index.
pub fn normalize_row(row: &dyn RowAccessor, fallback_row_number: u32) -> Option<Event> {
    let get = |header: &str| row.field(header).unwrap_or("").to_string();

    let status = EventStatus::parse(row.field("Status").unwrap_or(""))?;

    Some(Event {
        row_number: row
            .row_index()
            .map(|i| i + 1)
            .unwrap_or(fallback_row_number),
        name: get("Name"),
        address: get("Address"),
        venue: get("Venue"),
        weekday: get("Weekday / Month"),
        time: get("Event Time"),
        language: get("Language"),
        level: get("Comedian Level"),
        frequency: get("Frequency"),
        category: get("Event Category"),
        sub_category: get("Event Sub-Category"),
        description: get("Event Description"),
        organizer_name: get("Organizer Name"),
        how_to_book: get("Contact / Book a Spot"),
        website: get("Website"),
        wheelchair_access: get("Wheelchair Access"),
        audience_entry_fee: get("Audience Entry Fee"),
        latitude: get("Latitude"),
        longitude: get("Longitude"),
        facebook_group: get("Facebook Group"),
        facebook_page: get("Facebook Page"),
        whatsapp: get("WhatsApp"),
        gform: get("Google Form"),
        instagram: get("Instagram"),
        email: get("Email"),
        update_info_form_link: get("Update Info Form Link"),
        status,
    })
}

/// Normalize a batch of rows.
///
/// Row failures are isolated: a row without a recognized status is logged and
/// dropped, never fatal to the batch. The result is sorted by event name, the
/// order the table displays.
pub fn normalize_rows(rows: &[SheetRow]) -> Vec<Event> {
    let mut events: Vec<Event> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let event = normalize_row(row, i as u32 + 1);
            if event.is_none() {
                tracing::warn!(
                    row = i,
                    status = row.field("Status").unwrap_or(""),
                    "dropping row with unrecognized status"
                );
            }
            event
        })
        .collect();

    events.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    events
}
