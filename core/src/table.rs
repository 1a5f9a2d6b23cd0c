//! Table filter and column-visibility model
//!
//! Pure view-state over an event list: per-column filters and a hidden-column
//! set. Filtering computes a visible index set and never touches the
//! underlying events. Column visibility is independent of filtering.

use hashbrown::{HashMap, HashSet};
use openmic_types::{ColumnId, Event};

/// One column's active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring match.
    Search(String),
    /// Exact match against one observed value.
    Select(String),
}

impl Filter {
    fn matches(&self, cell: &str) -> bool {
        match self {
            Filter::Search(text) => cell.to_lowercase().contains(&text.to_lowercase()),
            Filter::Select(value) => cell == value,
        }
    }
}

/// Filter values and hidden columns for the event table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    filters: HashMap<ColumnId, Filter>,
    hidden: HashSet<ColumnId>,
}

impl TableState {
    /// Fresh state: no filters, the default set of columns hidden.
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
            hidden: ColumnId::all()
                .iter()
                .copied()
                .filter(|c| c.hidden_initially())
                .collect(),
        }
    }

    /// Set or clear a column's search filter. Empty text clears.
    pub fn set_search(&mut self, col: ColumnId, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.filters.remove(&col);
        } else {
            self.filters.insert(col, Filter::Search(text));
        }
    }

    /// Set or clear a column's exact-match filter. `None` means "show all".
    pub fn set_select(&mut self, col: ColumnId, value: Option<String>) {
        match value {
            Some(v) => self.filters.insert(col, Filter::Select(v)),
            None => self.filters.remove(&col),
        };
    }

    pub fn filter(&self, col: ColumnId) -> Option<&Filter> {
        self.filters.get(&col)
    }

    pub fn toggle_column(&mut self, col: ColumnId) {
        if !self.hidden.remove(&col) {
            self.hidden.insert(col);
        }
    }

    pub fn is_hidden(&self, col: ColumnId) -> bool {
        self.hidden.contains(&col)
    }

    /// Columns currently shown, in display order.
    pub fn visible_columns(&self) -> Vec<ColumnId> {
        ColumnId::all()
            .iter()
            .copied()
            .filter(|c| !self.hidden.contains(c))
            .collect()
    }

    /// Whether an event passes every active filter.
    ///
    /// Hidden columns still filter; visibility and filtering are independent.
    pub fn matches(&self, event: &Event) -> bool {
        self.filters
            .iter()
            .all(|(col, filter)| filter.matches(event.field(*col)))
    }

    /// Indices of the events that pass the active filters.
    pub fn visible_rows(&self, events: &[Event]) -> Vec<usize> {
        events
            .iter()
            .enumerate()
            .filter(|(_, e)| self.matches(e))
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct observed values for a column, sorted, for the select dropdown.
pub fn distinct_values(col: ColumnId, events: &[Event]) -> Vec<String> {
    let mut values: Vec<String> = events
        .iter()
        .map(|e| e.field(col).to_string())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    values.sort();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    #[test]
    fn status_select_filter_narrows_and_clears() {
        // 3 sample events: 2 active, 1 inactive
        let events = fallback::sample_events();
        let mut state = TableState::new();

        state.set_select(ColumnId::Status, Some("Active".into()));
        assert_eq!(state.visible_rows(&events).len(), 2);

        state.set_select(ColumnId::Status, None);
        assert_eq!(state.visible_rows(&events).len(), 3);
    }

    #[test]
    fn search_filter_is_case_insensitive_substring() {
        let events = fallback::sample_events();
        let mut state = TableState::new();

        state.set_search(ColumnId::Name, "comedy milano");
        assert_eq!(state.visible_rows(&events), vec![0]);

        state.set_search(ColumnId::Name, "COMEDY");
        assert_eq!(state.visible_rows(&events).len(), 3);

        state.set_search(ColumnId::Name, "");
        assert_eq!(state.visible_rows(&events).len(), 3);
    }

    #[test]
    fn filters_combine_across_columns() {
        let events = fallback::sample_events();
        let mut state = TableState::new();

        state.set_select(ColumnId::Status, Some("Active".into()));
        state.set_select(ColumnId::Language, Some("Italian".into()));
        let visible = state.visible_rows(&events);
        assert_eq!(visible.len(), 1);
        assert_eq!(events[visible[0]].name, "Italian Comedy Night");
    }

    #[test]
    fn zero_rows_after_filtering_is_valid() {
        let events = fallback::sample_events();
        let mut state = TableState::new();
        state.set_search(ColumnId::Name, "no such event");
        assert!(state.visible_rows(&events).is_empty());
    }

    #[test]
    fn filtering_does_not_mutate_events() {
        let events = fallback::sample_events();
        let snapshot = events.clone();
        let mut state = TableState::new();
        state.set_search(ColumnId::Name, "showcase");
        let _ = state.visible_rows(&events);
        assert_eq!(events, snapshot);
    }

    #[test]
    fn column_visibility_is_independent_of_filtering() {
        let events = fallback::sample_events();
        let mut state = TableState::new();

        assert!(state.is_hidden(ColumnId::Description));
        state.toggle_column(ColumnId::Description);
        assert!(!state.is_hidden(ColumnId::Description));

        // Filtering on a hidden column still applies
        state.toggle_column(ColumnId::Description);
        state.set_search(ColumnId::Description, "italian language");
        assert_eq!(state.visible_rows(&events).len(), 1);
    }

    #[test]
    fn visible_columns_preserve_display_order() {
        let state = TableState::new();
        let visible = state.visible_columns();
        assert!(visible.starts_with(&[ColumnId::EditLink, ColumnId::Links, ColumnId::Name]));
        assert!(!visible.contains(&ColumnId::Description));
    }

    #[test]
    fn distinct_values_are_sorted_and_deduped() {
        let events = fallback::sample_events();
        assert_eq!(
            distinct_values(ColumnId::Status, &events),
            vec!["Active".to_string(), "Inactive".to_string()]
        );
        assert_eq!(
            distinct_values(ColumnId::Language, &events),
            vec!["English".to_string(), "Italian".to_string()]
        );
    }
}
