//! Built-in sample dataset
//!
//! Used whenever the live spreadsheet cannot produce a non-empty normalized
//! dataset. Deterministic, no I/O. The rows intentionally mirror the sheet's
//! canonical header set so they exercise the same normalization path as live
//! data.

use std::sync::Arc;

use openmic_types::{Event, EventStatus};

use crate::normalize::SheetRow;

/// The sheet's canonical header row.
pub const HEADER_ROW: &[&str] = &[
    "Name",
    "Address",
    "Audience Entry Fee",
    "Contact / Book a Spot",
    "Language",
    "Event Category",
    "Event Sub-Category",
    "Status",
    "Organizer Name",
    "Event Description",
    "Facebook Group",
    "Facebook Page",
    "WhatsApp",
    "Google Form",
    "Email",
    "Frequency",
    "Instagram",
    "Latitude",
    "Comedian Level",
    "Longitude",
    "Event Time",
    "Update Info Form Link",
    "Venue",
    "Weekday / Month",
    "Website",
    "Wheelchair Access",
];

/// Raw cell text for the three sample listings, in header order.
const SAMPLE_CELLS: &[&[&str]] = &[
    &[
        "Comedy Milano Open Mic",
        "Via Example 123, Milano",
        "Free",
        "DM on Instagram",
        "English",
        "Stand-up Comedy",
        "Open Mic",
        "Active",
        "Comedy Milano",
        "Weekly open mic night for new and experienced comedians",
        "https://facebook.com/groups/example",
        "https://facebook.com/comedymilano",
        "https://wa.me/1234567890",
        "https://forms.gle/example",
        "info@comedymilano.com",
        "Weekly",
        "https://instagram.com/comedymilano",
        "45.4642",
        "All Levels",
        "9.1900",
        "21:00",
        "https://forms.gle/update-example",
        "Comedy Club Milano",
        "Monday",
        "https://comedymilano.com",
        "Yes",
    ],
    &[
        "Italian Comedy Night",
        "Piazza Demo 45, Milano",
        "€5",
        "Email or DM",
        "Italian",
        "Stand-up Comedy",
        "Mixed Show",
        "Active",
        "Milano Comedy",
        "Italian language comedy night featuring local talent",
        "",
        "https://facebook.com/milanocomedy",
        "",
        "",
        "info@milanocomedy.it",
        "Bi-weekly",
        "https://instagram.com/milanocomedy",
        "45.4773",
        "Intermediate",
        "9.1815",
        "20:30",
        "https://forms.gle/another-example",
        "Bar Centrale",
        "Wednesday",
        "https://milanocomedy.it",
        "No",
    ],
    &[
        "International Comedy Showcase",
        "Via Test 78, Milano",
        "€10",
        "Email only",
        "English",
        "Stand-up Comedy",
        "Showcase",
        "Inactive",
        "Global Comedy",
        "International comedy showcase with performers from around the world",
        "https://facebook.com/groups/globalcomedy",
        "https://facebook.com/globalcomedymilano",
        "https://wa.me/9876543210",
        "",
        "bookings@globalcomedy.com",
        "Monthly",
        "https://instagram.com/globalcomedy",
        "45.4547",
        "Professional",
        "9.2010",
        "21:30",
        "https://forms.gle/yet-another-example",
        "Teatro Milano",
        "Last Friday",
        "https://globalcomedy.com",
        "Yes",
    ],
];

/// Sample listings as raw rows, the shape a live fetch would produce.
pub fn sample_rows() -> Vec<SheetRow> {
    let headers: Arc<[String]> = HEADER_ROW.iter().map(|h| h.to_string()).collect();
    SAMPLE_CELLS
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            SheetRow::positional(
                Arc::clone(&headers),
                cells.iter().map(|c| c.to_string()).collect(),
                Some(i as u32),
            )
        })
        .collect()
}

/// Sample listings in normalized form, sorted by name.
///
/// Built as literals rather than through the normalizer so tests can verify
/// the normalizer reproduces them from [`sample_rows`].
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            row_number: 1,
            name: "Comedy Milano Open Mic".into(),
            address: "Via Example 123, Milano".into(),
            venue: "Comedy Club Milano".into(),
            weekday: "Monday".into(),
            time: "21:00".into(),
            language: "English".into(),
            level: "All Levels".into(),
            frequency: "Weekly".into(),
            category: "Stand-up Comedy".into(),
            sub_category: "Open Mic".into(),
            description: "Weekly open mic night for new and experienced comedians".into(),
            organizer_name: "Comedy Milano".into(),
            how_to_book: "DM on Instagram".into(),
            website: "https://comedymilano.com".into(),
            wheelchair_access: "Yes".into(),
            audience_entry_fee: "Free".into(),
            latitude: "45.4642".into(),
            longitude: "9.1900".into(),
            facebook_group: "https://facebook.com/groups/example".into(),
            facebook_page: "https://facebook.com/comedymilano".into(),
            whatsapp: "https://wa.me/1234567890".into(),
            gform: "https://forms.gle/example".into(),
            instagram: "https://instagram.com/comedymilano".into(),
            email: "info@comedymilano.com".into(),
            update_info_form_link: "https://forms.gle/update-example".into(),
            status: EventStatus::Active,
        },
        Event {
            row_number: 3,
            name: "International Comedy Showcase".into(),
            address: "Via Test 78, Milano".into(),
            venue: "Teatro Milano".into(),
            weekday: "Last Friday".into(),
            time: "21:30".into(),
            language: "English".into(),
            level: "Professional".into(),
            frequency: "Monthly".into(),
            category: "Stand-up Comedy".into(),
            sub_category: "Showcase".into(),
            description: "International comedy showcase with performers from around the world"
                .into(),
            organizer_name: "Global Comedy".into(),
            how_to_book: "Email only".into(),
            website: "https://globalcomedy.com".into(),
            wheelchair_access: "Yes".into(),
            audience_entry_fee: "€10".into(),
            latitude: "45.4547".into(),
            longitude: "9.2010".into(),
            facebook_group: "https://facebook.com/groups/globalcomedy".into(),
            facebook_page: "https://facebook.com/globalcomedymilano".into(),
            whatsapp: "https://wa.me/9876543210".into(),
            gform: "".into(),
            instagram: "https://instagram.com/globalcomedy".into(),
            email: "bookings@globalcomedy.com".into(),
            update_info_form_link: "https://forms.gle/yet-another-example".into(),
            status: EventStatus::Inactive,
        },
        Event {
            row_number: 2,
            name: "Italian Comedy Night".into(),
            address: "Piazza Demo 45, Milano".into(),
            venue: "Bar Centrale".into(),
            weekday: "Wednesday".into(),
            time: "20:30".into(),
            language: "Italian".into(),
            level: "Intermediate".into(),
            frequency: "Bi-weekly".into(),
            category: "Stand-up Comedy".into(),
            sub_category: "Mixed Show".into(),
            description: "Italian language comedy night featuring local talent".into(),
            organizer_name: "Milano Comedy".into(),
            how_to_book: "Email or DM".into(),
            website: "https://milanocomedy.it".into(),
            wheelchair_access: "No".into(),
            audience_entry_fee: "€5".into(),
            latitude: "45.4773".into(),
            longitude: "9.1815".into(),
            facebook_group: "".into(),
            facebook_page: "https://facebook.com/milanocomedy".into(),
            whatsapp: "".into(),
            gform: "".into(),
            instagram: "https://instagram.com/milanocomedy".into(),
            email: "info@milanocomedy.it".into(),
            update_info_form_link: "https://forms.gle/another-example".into(),
            status: EventStatus::Active,
        },
    ]
}
