//! Google Sheets data source
//!
//! Fetches the published sheet through the Sheets API `values` endpoint and
//! shapes the response into rows for the normalizer. Every failure maps to a
//! [`SourceError`] and resolves downstream to the sample dataset; nothing
//! here ever surfaces as a user-facing error.

use dioxus::prelude::*;
use gloo_net::http::Request;
use serde::Deserialize;

use openmic_core::{DataLoader, SelectionCoordinator, SheetRow, SourceError};

use crate::constants::{API_KEY, SHEET_RANGE, SPREADSHEET_ID};

/// Body of a `values` endpoint response. `values[0]` is the header row.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

fn endpoint() -> String {
    format!(
        "https://sheets.googleapis.com/v4/spreadsheets/{SPREADSHEET_ID}/values/{SHEET_RANGE}?key={API_KEY}"
    )
}

/// Fetch the sheet and shape it into header-keyed rows.
pub async fn fetch_rows() -> Result<Vec<SheetRow>, SourceError> {
    let response = Request::get(&endpoint())
        .send()
        .await
        .map_err(|e| SourceError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(SourceError::Network(format!("HTTP {}", response.status())));
    }

    let body: ValuesResponse = response
        .json()
        .await
        .map_err(|e| SourceError::Malformed(e.to_string()))?;

    let mut rows = body.values.into_iter();
    let headers: Vec<String> = rows.next().ok_or(SourceError::Empty)?;

    Ok(rows
        .enumerate()
        .map(|(i, cells)| {
            // Short rows simply lack the trailing keys; the accessor fills
            // the gaps with empty strings.
            SheetRow::keyed(headers.iter().cloned().zip(cells), Some(i as u32))
        })
        .collect())
}

/// Run one load cycle: fetch, then apply under the cycle's generation tag.
///
/// A reload while this is in flight bumps the generation and the late result
/// is discarded by the loader. After a successful apply, a selection pointing
/// at a row that no longer exists is dropped.
pub async fn load_into(
    mut loader: Signal<DataLoader>,
    mut selection: Signal<SelectionCoordinator>,
) {
    let generation = loader.peek().generation();
    let result = fetch_rows().await;
    if loader.write().apply(generation, result) {
        let events = loader.peek().events().to_vec();
        selection.write().retain_valid(&events);
    }
}
