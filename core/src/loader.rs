//! Load-cycle state machine
//!
//! One cycle runs `Loading -> Ready` (live data) or `Loading -> FallbackReady`
//! (sample data). Both end states are terminal for the cycle; a manual reload
//! starts a fresh one. There is no retry: a failed fetch is final and resolves
//! to the sample dataset, never to a user-facing error.

use openmic_types::Event;
use thiserror::Error;

use crate::fallback;
use crate::normalize::{SheetRow, normalize_rows};

/// Why a fetch produced no usable data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("source returned no data rows")]
    Empty,
}

/// Where the current load cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Fetch in flight; no rows exposed yet.
    #[default]
    Loading,
    /// Live data arrived and normalized to at least one event.
    Ready,
    /// Fetch failed or yielded nothing usable; sample data exposed.
    FallbackReady,
}

/// Holds the current dataset and load phase.
///
/// `generation` guards against a stale fetch landing after a reload (or after
/// the view that spawned it is gone): results tagged with an old generation
/// are discarded.
#[derive(Debug, Clone, Default)]
pub struct DataLoader {
    phase: LoadPhase,
    events: Vec<Event>,
    generation: u32,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Current dataset. Empty while loading.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Generation tag the in-flight fetch must present to [`DataLoader::apply`].
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Start a new load cycle. Returns the new generation tag.
    pub fn reload(&mut self) -> u32 {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.events.clear();
        self.generation
    }

    /// Apply a completed fetch.
    ///
    /// Returns `false` (and changes nothing) when the result belongs to a
    /// superseded cycle or the current cycle already finished. Otherwise the
    /// cycle ends in `Ready` with the normalized rows, or `FallbackReady`
    /// with the sample dataset when nothing usable arrived.
    pub fn apply(&mut self, generation: u32, result: Result<Vec<SheetRow>, SourceError>) -> bool {
        if generation != self.generation || self.phase != LoadPhase::Loading {
            tracing::debug!(generation, "discarding stale load result");
            return false;
        }

        match result {
            Ok(rows) => {
                let events = normalize_rows(&rows);
                if events.is_empty() {
                    tracing::warn!("source produced no usable rows, using sample data");
                    self.enter_fallback();
                } else {
                    tracing::info!(count = events.len(), "loaded events from source");
                    self.phase = LoadPhase::Ready;
                    self.events = events;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "data load failed, using sample data");
                self.enter_fallback();
            }
        }
        true
    }

    fn enter_fallback(&mut self) {
        self.phase = LoadPhase::FallbackReady;
        self.events = fallback::sample_events();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_ends_in_fallback_with_sample_records() {
        let mut loader = DataLoader::new();
        assert!(loader.is_loading());
        assert!(loader.events().is_empty());

        let applied = loader.apply(0, Err(SourceError::Network("offline".into())));
        assert!(applied);
        assert_eq!(loader.phase(), LoadPhase::FallbackReady);
        assert_eq!(loader.events(), fallback::sample_events());
    }

    #[test]
    fn zero_row_fetch_ends_in_fallback() {
        let mut loader = DataLoader::new();
        assert!(loader.apply(0, Ok(vec![])));
        assert_eq!(loader.phase(), LoadPhase::FallbackReady);
        assert_eq!(loader.events(), fallback::sample_events());
    }

    #[test]
    fn successful_fetch_ends_ready_with_normalized_rows() {
        let mut loader = DataLoader::new();
        assert!(loader.apply(0, Ok(fallback::sample_rows())));
        assert_eq!(loader.phase(), LoadPhase::Ready);
        assert_eq!(loader.events().len(), 3);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut loader = DataLoader::new();
        let stale = loader.generation();
        let fresh = loader.reload();
        assert_ne!(stale, fresh);

        assert!(!loader.apply(stale, Ok(fallback::sample_rows())));
        assert!(loader.is_loading());
        assert!(loader.events().is_empty());

        assert!(loader.apply(fresh, Ok(fallback::sample_rows())));
        assert_eq!(loader.phase(), LoadPhase::Ready);
    }

    #[test]
    fn terminal_phase_ignores_duplicate_results() {
        let mut loader = DataLoader::new();
        assert!(loader.apply(0, Ok(fallback::sample_rows())));
        // Same generation reporting again changes nothing
        assert!(!loader.apply(0, Err(SourceError::Empty)));
        assert_eq!(loader.phase(), LoadPhase::Ready);
    }

    #[test]
    fn reload_restarts_the_cycle() {
        let mut loader = DataLoader::new();
        loader.apply(0, Ok(fallback::sample_rows()));
        let generation = loader.reload();
        assert!(loader.is_loading());
        assert!(loader.events().is_empty());
        assert_eq!(generation, 1);
    }
}
