//! Selection coordination
//!
//! Single source of truth for "which event is selected". Both the table and
//! the map read this state and derive their own highlight/popup from it, so
//! the two views can never disagree, no matter which one the click came from.

use openmic_types::Event;

/// The one selected event, keyed by row number, or none.
///
/// Toggle semantics: selecting the already-selected row clears the selection,
/// selecting any other row replaces it. Presence decides the toggle, not
/// position, so the first row toggles like every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCoordinator {
    selected: Option<u32>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle selection for a row number.
    pub fn select(&mut self, row_number: u32) {
        self.selected = if self.selected == Some(row_number) {
            None
        } else {
            Some(row_number)
        };
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn current(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_selected(&self, row_number: u32) -> bool {
        self.selected == Some(row_number)
    }

    /// Drop the selection when the selected row is gone from a reloaded
    /// dataset, so neither view references a stale event.
    pub fn retain_valid(&mut self, events: &[Event]) {
        if let Some(row) = self.selected
            && !events.iter().any(|e| e.row_number == row)
        {
            self.selected = None;
        }
    }

    /// Which marker's popup should be open, given the set of plotted rows.
    ///
    /// At most one popup is ever open: the selected marker's, and only if
    /// that event is actually plotted.
    pub fn open_popup(&self, plotted: &[u32]) -> Option<u32> {
        self.selected.filter(|row| plotted.contains(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    #[test]
    fn select_toggle_law() {
        let mut sel = SelectionCoordinator::new();
        assert_eq!(sel.current(), None);

        sel.select(4);
        assert_eq!(sel.current(), Some(4));

        // Different row replaces
        sel.select(7);
        assert_eq!(sel.current(), Some(7));

        // Same row clears
        sel.select(7);
        assert_eq!(sel.current(), None);

        // Repeated identical calls keep alternating
        sel.select(7);
        sel.select(7);
        sel.select(7);
        assert_eq!(sel.current(), Some(7));
    }

    #[test]
    fn first_row_toggles_like_any_other() {
        // Row number 1 is the lowest identity a load produces; toggling it
        // off must work even though it sits at index zero.
        let mut sel = SelectionCoordinator::new();
        sel.select(1);
        assert_eq!(sel.current(), Some(1));
        sel.select(1);
        assert_eq!(sel.current(), None);
    }

    #[test]
    fn at_most_one_popup_open() {
        let plotted = vec![1, 2, 3];
        let mut sel = SelectionCoordinator::new();
        assert_eq!(sel.open_popup(&plotted), None);

        sel.select(2);
        assert_eq!(sel.open_popup(&plotted), Some(2));

        sel.select(3);
        assert_eq!(sel.open_popup(&plotted), Some(3));

        sel.select(3);
        assert_eq!(sel.open_popup(&plotted), None);
    }

    #[test]
    fn marker_click_on_selected_row_deselects() {
        // The map wires markers as: click -> select(row) (full toggle), and
        // popupclose -> clear only while that row is still selected.
        let mut sel = SelectionCoordinator::new();
        let plotted = vec![3, 5];

        sel.select(5);
        assert_eq!(sel.open_popup(&plotted), Some(5));

        // Second click on the open marker toggles the selection off; the
        // popup close it triggers sees a non-selected row and changes nothing.
        sel.select(5);
        assert_eq!(sel.current(), None);
        if sel.is_selected(5) {
            sel.clear();
        }
        assert_eq!(sel.open_popup(&plotted), None);

        // Closing via the popup's own button clears the selection too
        sel.select(3);
        if sel.is_selected(3) {
            sel.clear();
        }
        assert_eq!(sel.current(), None);

        // A close fired for a superseded popup must not clear the new pick
        sel.select(3);
        sel.select(5);
        if sel.is_selected(3) {
            sel.clear();
        }
        assert_eq!(sel.current(), Some(5));
        assert_eq!(sel.open_popup(&plotted), Some(5));
    }

    #[test]
    fn unplotted_selection_opens_no_popup() {
        // Selected from the table, but the event has no usable coordinates
        let mut sel = SelectionCoordinator::new();
        sel.select(9);
        assert_eq!(sel.open_popup(&[1, 2, 3]), None);
    }

    #[test]
    fn reload_clears_vanished_selection() {
        let events = fallback::sample_events();
        let mut sel = SelectionCoordinator::new();

        sel.select(2);
        sel.retain_valid(&events);
        assert_eq!(sel.current(), Some(2));

        sel.select(99);
        sel.retain_valid(&events);
        assert_eq!(sel.current(), None);
    }
}
