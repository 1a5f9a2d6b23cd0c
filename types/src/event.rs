//! Event record types
//!
//! An [`Event`] is one open-mic listing. Records are value objects: they are
//! rebuilt wholesale on every data load and never mutated in place.

use serde::{Deserialize, Serialize};

use crate::columns::ColumnId;

/// Listing status, normalized from free-form spreadsheet text.
///
/// Anything that does not trim/lowercase to `active` or `inactive` is not a
/// valid listing and gets dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Inactive,
}

impl EventStatus {
    /// Parse spreadsheet text into a canonical status.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "active" => Some(EventStatus::Active),
            "inactive" => Some(EventStatus::Inactive),
            _ => None,
        }
    }

    /// Display form matching the spreadsheet's canonical spelling.
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Active => "Active",
            EventStatus::Inactive => "Inactive",
        }
    }
}

/// One open-mic listing.
///
/// `row_number` is the stable per-load identity and doubles as the selection
/// key shared by the table and the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub row_number: u32,
    pub name: String,
    pub address: String,
    pub venue: String,
    pub weekday: String,
    pub time: String,
    pub language: String,
    pub level: String,
    pub frequency: String,
    pub category: String,
    pub sub_category: String,
    pub description: String,
    pub organizer_name: String,
    pub how_to_book: String,
    pub website: String,
    pub wheelchair_access: String,
    pub audience_entry_fee: String,
    pub latitude: String,
    pub longitude: String,
    pub facebook_group: String,
    pub facebook_page: String,
    pub whatsapp: String,
    pub gform: String,
    pub instagram: String,
    pub email: String,
    pub update_info_form_link: String,
    pub status: EventStatus,
}

impl Event {
    /// Geographic position, if both coordinate fields parse.
    ///
    /// Events without a usable position still appear in the table; the map
    /// simply omits them.
    pub fn coords(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse::<f64>().ok()?;
        let lng = self.longitude.trim().parse::<f64>().ok()?;
        Some((lat, lng))
    }

    /// Cell text for a displayed column.
    pub fn field(&self, col: ColumnId) -> &str {
        match col {
            ColumnId::EditLink => &self.update_info_form_link,
            ColumnId::Links => &self.instagram,
            ColumnId::Name => &self.name,
            ColumnId::Description => &self.description,
            ColumnId::Category => &self.category,
            ColumnId::SubCategory => &self.sub_category,
            ColumnId::Status => self.status.label(),
            ColumnId::OrganizerName => &self.organizer_name,
            ColumnId::AudienceEntryFee => &self.audience_entry_fee,
            ColumnId::Level => &self.level,
            ColumnId::Language => &self.language,
            ColumnId::Frequency => &self.frequency,
            ColumnId::Weekday => &self.weekday,
            ColumnId::Time => &self.time,
            ColumnId::Venue => &self.venue,
            ColumnId::Website => &self.website,
            ColumnId::Address => &self.address,
            ColumnId::WheelchairAccess => &self.wheelchair_access,
            ColumnId::HowToBook => &self.how_to_book,
            ColumnId::FacebookGroup => &self.facebook_group,
        }
    }
}
