//! Table column metadata
//!
//! Mirrors the spreadsheet's column set. Each column knows its source header,
//! its i18n label key, which filter control it renders, and whether it starts
//! hidden. The table component iterates [`ColumnId::all`] instead of
//! hard-coding a layout.

use serde::{Deserialize, Serialize};

/// Filter control rendered in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Free-text substring match.
    Search,
    /// Exact match against one of the column's observed values.
    Select,
    /// No filter control.
    None,
}

/// Identity of a displayed table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    /// Per-row "update this listing" link (icon cell, no header text).
    EditLink,
    /// Social/contact link icons (icon cell, no header text).
    Links,
    Name,
    Description,
    Category,
    SubCategory,
    Status,
    OrganizerName,
    AudienceEntryFee,
    Level,
    Language,
    Frequency,
    Weekday,
    Time,
    Venue,
    Website,
    Address,
    WheelchairAccess,
    HowToBook,
    FacebookGroup,
}

impl ColumnId {
    /// All columns in display order.
    pub fn all() -> &'static [ColumnId] {
        &[
            ColumnId::EditLink,
            ColumnId::Links,
            ColumnId::Name,
            ColumnId::Description,
            ColumnId::Category,
            ColumnId::SubCategory,
            ColumnId::Status,
            ColumnId::OrganizerName,
            ColumnId::AudienceEntryFee,
            ColumnId::Level,
            ColumnId::Language,
            ColumnId::Frequency,
            ColumnId::Weekday,
            ColumnId::Time,
            ColumnId::Venue,
            ColumnId::Website,
            ColumnId::Address,
            ColumnId::WheelchairAccess,
            ColumnId::HowToBook,
            ColumnId::FacebookGroup,
        ]
    }

    /// Source spreadsheet header this column reads from.
    pub fn header(&self) -> &'static str {
        match self {
            ColumnId::EditLink => "Update Info Form Link",
            ColumnId::Links => "Instagram",
            ColumnId::Name => "Name",
            ColumnId::Description => "Event Description",
            ColumnId::Category => "Event Category",
            ColumnId::SubCategory => "Event Sub-Category",
            ColumnId::Status => "Status",
            ColumnId::OrganizerName => "Organizer Name",
            ColumnId::AudienceEntryFee => "Audience Entry Fee",
            ColumnId::Level => "Comedian Level",
            ColumnId::Language => "Language",
            ColumnId::Frequency => "Frequency",
            ColumnId::Weekday => "Weekday / Month",
            ColumnId::Time => "Event Time",
            ColumnId::Venue => "Venue",
            ColumnId::Website => "Website",
            ColumnId::Address => "Address",
            ColumnId::WheelchairAccess => "Wheelchair Access",
            ColumnId::HowToBook => "Contact / Book a Spot",
            ColumnId::FacebookGroup => "Facebook Group",
        }
    }

    /// i18n key for the column label (empty for icon columns).
    pub fn label_key(&self) -> &'static str {
        match self {
            ColumnId::EditLink | ColumnId::Links => "",
            ColumnId::Name => "column.name",
            ColumnId::Description => "column.description",
            ColumnId::Category => "column.category",
            ColumnId::SubCategory => "column.sub_category",
            ColumnId::Status => "column.status",
            ColumnId::OrganizerName => "column.organizer_name",
            ColumnId::AudienceEntryFee => "column.audience_entry_fee",
            ColumnId::Level => "column.level",
            ColumnId::Language => "column.language",
            ColumnId::Frequency => "column.frequency",
            ColumnId::Weekday => "column.weekday",
            ColumnId::Time => "column.time",
            ColumnId::Venue => "column.venue",
            ColumnId::Website => "column.website",
            ColumnId::Address => "column.address",
            ColumnId::WheelchairAccess => "column.wheelchair_access",
            ColumnId::HowToBook => "column.how_to_book",
            ColumnId::FacebookGroup => "column.facebook_group",
        }
    }

    /// Which filter control this column renders.
    pub fn filter_kind(&self) -> FilterKind {
        match self {
            ColumnId::Name
            | ColumnId::Description
            | ColumnId::Category
            | ColumnId::SubCategory
            | ColumnId::OrganizerName
            | ColumnId::Time
            | ColumnId::Address => FilterKind::Search,
            ColumnId::Status
            | ColumnId::AudienceEntryFee
            | ColumnId::Level
            | ColumnId::Language
            | ColumnId::Frequency
            | ColumnId::Weekday
            | ColumnId::WheelchairAccess => FilterKind::Select,
            ColumnId::EditLink
            | ColumnId::Links
            | ColumnId::Venue
            | ColumnId::Website
            | ColumnId::HowToBook
            | ColumnId::FacebookGroup => FilterKind::None,
        }
    }

    /// Columns that start hidden until toggled on in the column picker.
    pub fn hidden_initially(&self) -> bool {
        matches!(
            self,
            ColumnId::Description
                | ColumnId::Category
                | ColumnId::SubCategory
                | ColumnId::OrganizerName
                | ColumnId::AudienceEntryFee
                | ColumnId::Website
                | ColumnId::WheelchairAccess
                | ColumnId::FacebookGroup
        )
    }
}
