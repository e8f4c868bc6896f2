//! Card layout controller
//!
//! Captures drag/resize end-state per card id, persists the whole layout
//! map under a single preference key, and reapplies it on load. The
//! drag/resize mechanics live in an external library; this controller only
//! consumes its end-of-gesture events.

use nasma_metrics_storage::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Preference key holding the whole card layout map.
pub const LAYOUT_KEY: &str = "dashboard-card-layout";

/// Persisted placement for one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Owns the persisted layout map and the in-memory overrides applied to the
/// cards. Whole-map read-modify-write keeps the single preference entry
/// consistent.
pub struct CardLayoutController<S: PreferenceStore> {
    store: S,
    layout: BTreeMap<String, CardRect>,
    edit_mode: bool,
}

impl<S: PreferenceStore> CardLayoutController<S> {
    /// Load the persisted layout. A failing or unreadable store degrades to
    /// an empty layout (session-only behavior) rather than failing the
    /// page.
    pub fn new(store: S, edit_mode: bool) -> Self {
        let layout = match store.get_json::<BTreeMap<String, CardRect>>(LAYOUT_KEY) {
            Ok(Some(map)) => map,
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log::warn!("card layout unavailable, using defaults: {e}");
                BTreeMap::new()
            }
        };
        Self {
            store,
            layout,
            edit_mode,
        }
    }

    /// Saved placements to apply before cards become interactive. Read-only
    /// mode still applies these; only the handles are disabled.
    pub fn restore(&self) -> &BTreeMap<String, CardRect> {
        &self.layout
    }

    pub fn rect(&self, card_id: &str) -> Option<CardRect> {
        self.layout.get(card_id).copied()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Drag ended: persist this card's placement. Ignored outside edit mode
    /// (the handles are not interactive there).
    pub fn on_drag_end(&mut self, card_id: &str, rect: CardRect) {
        if !self.edit_mode {
            return;
        }
        self.layout.insert(card_id.to_string(), rect);
        self.persist();
    }

    /// Resize ended: same persistence path as a drag. The caller passes the
    /// card's current rendered box when no explicit size override was set.
    pub fn on_resize_end(&mut self, card_id: &str, rect: CardRect) {
        if !self.edit_mode {
            return;
        }
        self.layout.insert(card_id.to_string(), rect);
        self.persist();
    }

    /// Clear the entire persisted map and every in-memory override,
    /// returning all cards to stylesheet-default placement.
    pub fn reset(&mut self) {
        self.layout.clear();
        if let Err(e) = self.store.remove(LAYOUT_KEY) {
            log::warn!("failed to clear persisted layout: {e}");
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set_json(LAYOUT_KEY, &self.layout) {
            log::warn!("failed to persist card layout: {e}");
        }
    }

    /// Hand the store back (page teardown / tests).
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Edit-mode detection from the page URL's query string: `admin=true`
/// enables the drag handles and layout persistence.
pub fn edit_mode_from_query(query: &str) -> bool {
    form_urlencoded::parse(query.as_bytes())
        .any(|(key, value)| key == "admin" && value == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nasma_metrics_storage::{MemoryStore, UnavailableStore};

    fn rect(x: f64, y: f64) -> CardRect {
        CardRect {
            x,
            y,
            width: 320.0,
            height: 240.0,
        }
    }

    #[test]
    fn test_persist_then_reload_reproduces_layout() {
        let mut controller = CardLayoutController::new(MemoryStore::new(), true);
        controller.on_drag_end("card-adoption", rect(40.0, 80.0));
        controller.on_resize_end("card-requests", rect(0.0, 0.0));

        let store = controller.into_store();
        let reloaded = CardLayoutController::new(store, true);
        assert_eq!(reloaded.rect("card-adoption"), Some(rect(40.0, 80.0)));
        assert_eq!(reloaded.rect("card-requests"), Some(rect(0.0, 0.0)));
    }

    #[test]
    fn test_reset_clears_store_and_overrides() {
        let mut controller = CardLayoutController::new(MemoryStore::new(), true);
        controller.on_drag_end("card-adoption", rect(40.0, 80.0));
        controller.reset();
        assert!(controller.restore().is_empty());

        let store = controller.into_store();
        let reloaded = CardLayoutController::new(store, true);
        assert_eq!(reloaded.rect("card-adoption"), None);
    }

    #[test]
    fn test_read_only_mode_ignores_gestures() {
        let mut seed = CardLayoutController::new(MemoryStore::new(), true);
        seed.on_drag_end("card-adoption", rect(40.0, 80.0));
        let store = seed.into_store();

        // Saved layout still applies in read-only mode.
        let mut controller = CardLayoutController::new(store, false);
        assert_eq!(controller.rect("card-adoption"), Some(rect(40.0, 80.0)));

        // But gestures do nothing.
        controller.on_drag_end("card-adoption", rect(0.0, 0.0));
        assert_eq!(controller.rect("card-adoption"), Some(rect(40.0, 80.0)));
    }

    #[test]
    fn test_unavailable_store_degrades_to_session_only() {
        let mut controller = CardLayoutController::new(UnavailableStore, true);
        assert!(controller.restore().is_empty());
        // Gesture state is kept in memory even though persistence fails.
        controller.on_drag_end("card-adoption", rect(40.0, 80.0));
        assert_eq!(controller.rect("card-adoption"), Some(rect(40.0, 80.0)));
    }

    #[test]
    fn test_edit_mode_from_query() {
        assert!(edit_mode_from_query("admin=true"));
        assert!(edit_mode_from_query("tab=overview&admin=true"));
        assert!(!edit_mode_from_query("admin=false"));
        assert!(!edit_mode_from_query(""));
    }
}
