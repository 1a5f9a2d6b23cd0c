pub mod fallback;
pub mod loader;
pub mod normalize;
pub mod selection;
pub mod table;

#[cfg(test)]
mod normalize_tests;

// Re-exports for convenience
pub use loader::{DataLoader, LoadPhase, SourceError};
pub use normalize::{RowAccessor, SheetRow, normalize_row, normalize_rows};
pub use selection::SelectionCoordinator;
pub use table::{Filter, TableState};
