pub mod columns;
pub mod event;

// Re-exports for convenience
pub use columns::{ColumnId, FilterKind};
pub use event::{Event, EventStatus};
