//! UI Components
//!
//! Table, map, and page chrome. Shared state travels through context: the
//! data loader, the selection coordinator, the table filter state, and the
//! language signal are provided once at the app root.

pub mod event_table;
pub mod map_view;
pub mod navbar;
pub mod table_and_map;

pub use event_table::EventTable;
pub use map_view::MapView;
pub use navbar::NavigationBar;
pub use table_and_map::TableAndMap;
