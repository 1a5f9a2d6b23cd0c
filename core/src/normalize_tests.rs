//! Tests for row normalization
//!
//! Covers status canonicalization, the dual-shape accessor fallback, row
//! number assignment, and batch-level row isolation.

use std::sync::Arc;

use openmic_types::EventStatus;

use crate::fallback;
use crate::normalize::{RowAccessor, SheetRow, normalize_row, normalize_rows};

fn keyed_row(pairs: &[(&str, &str)], index: Option<u32>) -> SheetRow {
    SheetRow::keyed(
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        index,
    )
}

fn positional_row(headers: &[&str], cells: &[&str], index: Option<u32>) -> SheetRow {
    let headers: Arc<[String]> = headers.iter().map(|h| h.to_string()).collect();
    SheetRow::positional(headers, cells.iter().map(|c| c.to_string()).collect(), index)
}

// ─────────────────────────────────────────────────────────────────────────────
// Status canonicalization
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn canonical_status_is_kept() {
    let row = keyed_row(&[("Name", "Mic"), ("Status", "Active")], Some(0));
    let event = normalize_row(&row, 1).unwrap();
    assert_eq!(event.status, EventStatus::Active);
}

#[test]
fn status_is_case_insensitive() {
    let row = keyed_row(&[("Name", "Mic"), ("Status", "INACTIVE")], Some(0));
    let event = normalize_row(&row, 1).unwrap();
    assert_eq!(event.status, EventStatus::Inactive);
}

#[test]
fn status_is_trimmed() {
    let row = keyed_row(&[("Name", "Mic"), ("Status", "active ")], Some(0));
    let event = normalize_row(&row, 1).unwrap();
    assert_eq!(event.status, EventStatus::Active);
}

#[test]
fn unrecognized_status_drops_the_record() {
    let row = keyed_row(&[("Name", "Mic"), ("Status", "Pending")], Some(0));
    assert!(normalize_row(&row, 1).is_none());
}

#[test]
fn missing_status_drops_the_record() {
    let row = keyed_row(&[("Name", "Mic")], Some(0));
    assert!(normalize_row(&row, 1).is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Dual-shape accessor
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn keyed_accessor_is_primary() {
    let row = keyed_row(&[("Name", "Keyed Mic"), ("Status", "Active")], Some(0));
    assert_eq!(row.field("Name"), Some("Keyed Mic"));
}

#[test]
fn positional_lookup_is_the_fallback() {
    let row = positional_row(
        &["Name", "Status", "Venue"],
        &["Legacy Mic", "Active", "Bar"],
        Some(0),
    );
    assert_eq!(row.field("Name"), Some("Legacy Mic"));
    assert_eq!(row.field("Venue"), Some("Bar"));

    let event = normalize_row(&row, 1).unwrap();
    assert_eq!(event.name, "Legacy Mic");
    assert_eq!(event.venue, "Bar");
}

#[test]
fn absent_fields_default_to_empty_string() {
    let row = keyed_row(&[("Name", "Mic"), ("Status", "Active")], Some(0));
    let event = normalize_row(&row, 1).unwrap();
    assert_eq!(event.address, "");
    assert_eq!(event.website, "");
    assert_eq!(event.email, "");
}

#[test]
fn positional_row_shorter_than_headers_defaults_missing_cells() {
    // Trailing empty cells are commonly omitted by the source
    let row = positional_row(&["Name", "Status", "Venue"], &["Mic", "Active"], Some(0));
    let event = normalize_row(&row, 1).unwrap();
    assert_eq!(event.venue, "");
}

// ─────────────────────────────────────────────────────────────────────────────
// Row numbers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn row_number_is_native_index_plus_one() {
    let row = keyed_row(&[("Name", "Mic"), ("Status", "Active")], Some(6));
    let event = normalize_row(&row, 99).unwrap();
    assert_eq!(event.row_number, 7);
}

#[test]
fn row_number_falls_back_when_index_is_unknown() {
    let row = keyed_row(&[("Name", "Mic"), ("Status", "Active")], None);
    let event = normalize_row(&row, 42).unwrap();
    assert_eq!(event.row_number, 42);
}

// ─────────────────────────────────────────────────────────────────────────────
// Batch behavior
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bad_row_does_not_abort_the_batch() {
    let rows = vec![
        keyed_row(&[("Name", "B Mic"), ("Status", "Active")], Some(0)),
        keyed_row(&[("Name", "Broken"), ("Status", "Pending")], Some(1)),
        keyed_row(&[("Name", "A Mic"), ("Status", "Inactive")], Some(2)),
    ];
    let events = normalize_rows(&rows);
    assert_eq!(events.len(), 2);
    // Sorted by name, identities preserved
    assert_eq!(events[0].name, "A Mic");
    assert_eq!(events[0].row_number, 3);
    assert_eq!(events[1].name, "B Mic");
    assert_eq!(events[1].row_number, 1);
}

#[test]
fn missing_coordinates_keep_the_record() {
    // Unplottable events still belong in the table
    let row = keyed_row(
        &[("Name", "Mic"), ("Status", "Active"), ("Latitude", "n/a")],
        Some(0),
    );
    let event = normalize_row(&row, 1).unwrap();
    assert_eq!(event.coords(), None);
}

#[test]
fn sample_dataset_round_trips_through_the_normalizer() {
    // Already-canonical data must come out unchanged
    assert_eq!(normalize_rows(&fallback::sample_rows()), fallback::sample_events());
}
