//! LED State Store
//!
//! Hält den aktuellen [`LedState`]. Jedes Update ersetzt den Zustand
//! komplett, es gibt keine Teil-Updates.

use crate::form::UpdateRequest;
use crate::types::{LedState, MAX_LEDS};

#[derive(Debug, Default)]
pub struct LedStateStore {
    state: LedState,
}

impl LedStateStore {
    pub fn new(state: LedState) -> Self {
        Self { state }
    }

    /// Snapshot des aktuellen Zustands
    pub fn read(&self) -> LedState {
        self.state
    }

    /// Ersetzt Farbe, LED-Anzahl und Maske
    ///
    /// Alle Masken-Einträge werden zuerst gelöscht, dann werden nur die
    /// Indizes aus `request.on_indices` gesetzt, die unter `active_count`
    /// liegen.
    pub fn apply(&mut self, request: &UpdateRequest) -> LedState {
        let active_count = request.active_count.min(MAX_LEDS as u16);

        let mut on_mask = [false; MAX_LEDS];
        for &index in request.on_indices.iter() {
            if index < active_count {
                on_mask[usize::from(index)] = true;
            }
        }

        self.state = LedState {
            hue: request.hue,
            saturation: request.saturation,
            value: request.value,
            active_count,
            on_mask,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_whole_mask() {
        let mut store = LedStateStore::default();
        store.apply(&UpdateRequest::parse_form(
            "hue=1&saturation=2&value=3&num_leds=5&leds[]=0&leds[]=4",
        ));
        let state = store.apply(&UpdateRequest::parse_form(
            "hue=1&saturation=2&value=3&num_leds=5&leds[]=2",
        ));

        assert!(!state.on_mask[0]);
        assert!(state.on_mask[2]);
        assert!(!state.on_mask[4]);
        assert_eq!(store.read(), state);
    }

    #[test]
    fn test_apply_clamps_active_count() {
        let mut store = LedStateStore::default();
        let mut request = UpdateRequest::parse_form("hue=0&saturation=0&value=0&num_leds=2");
        request.active_count = 500;
        let _ = request.on_indices.push(149);

        let state = store.apply(&request);
        assert_eq!(state.active_count, MAX_LEDS as u16);
        assert!(state.on_mask[149]);
    }

    #[test]
    fn test_apply_ignores_indices_beyond_active_count() {
        let mut store = LedStateStore::default();
        let mut request = UpdateRequest::parse_form("hue=0&saturation=0&value=0&num_leds=3");
        let _ = request.on_indices.push(7);

        let state = store.apply(&request);
        assert!(!state.on_mask[7]);
    }
}
