//! Deployment constants
//!
//! Spreadsheet identity, access credential, and map defaults. The API key is
//! a public read-only key injected at build time so forks don't inherit it.

/// Published Google Sheet backing the directory.
pub const SPREADSHEET_ID: &str = "1_X_znvg8kGbFMXoys011182T5ZTGONCsveY9uLEWsr8";

/// Read-only Sheets API key, injected at build time.
pub const API_KEY: &str = match option_env!("SHEETS_API_KEY") {
    Some(key) => key,
    None => "",
};

/// Cell range covering the header row and every listing.
pub const SHEET_RANGE: &str = "A:Z";

/// Milano city center.
pub const MAP_CENTER: (f64, f64) = (45.463336, 9.187174);
pub const MAP_ZOOM: f64 = 13.0;

pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const GITHUB_URL: &str = "https://github.com/morettimarco/open-mic-nights";
pub const GOOGLE_FORM_URL: &str = "https://forms.gle/vDuLfQ7Bc9iKxT2o8";
pub const CONTACT_URL: &str = "https://www.instagram.com/_anarchytect/";
pub const ORIGINAL_PROJECT_URL: &str = "https://apuchitnis.github.io/open-mic-nights/";

/// Human-browsable URL of the backing sheet.
pub fn spreadsheet_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/{SPREADSHEET_ID}")
}
