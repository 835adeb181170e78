//! LED Controller
//!
//! Bündelt State Store und Render Engine. Die Firmware hält genau eine
//! Instanz hinter einem Mutex und reicht sie an den HTTP-Task weiter.

use core::fmt;

use crate::engine::RenderEngine;
use crate::form::UpdateRequest;
use crate::page;
use crate::store::LedStateStore;
use crate::traits::{LedError, StripWriter};
use crate::types::{LedState, Redirect};

/// Ergebnis eines Formular-Submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Neuer Zustand nach dem Update
    pub state: LedState,
    /// Ergebnis des Strip-Writes (nur fürs Logging)
    pub render: Result<(), LedError>,
    /// Antwort an den Browser, unabhängig von Parse- oder Render-Fehlern
    pub redirect: Redirect,
}

pub struct LedController<W: StripWriter> {
    store: LedStateStore,
    engine: RenderEngine<W>,
}

impl<W: StripWriter> LedController<W> {
    /// Controller mit Default-Zustand
    pub fn new(writer: W) -> Self {
        Self::with_state(writer, LedState::default())
    }

    pub fn with_state(writer: W, state: LedState) -> Self {
        Self {
            store: LedStateStore::new(state),
            engine: RenderEngine::new(writer),
        }
    }

    /// Erstes Rendern nach dem Booten (doppelter Write)
    pub fn start(&mut self) -> Result<(), LedError> {
        let state = self.store.read();
        self.engine.warm_up(&state)
    }

    pub fn state(&self) -> LedState {
        self.store.read()
    }

    /// Verarbeitet einen urlencoded Body von `POST /update`
    ///
    /// Parsen kann nicht fehlschlagen; der Redirect ist immer `303 → /`.
    pub fn handle_update(&mut self, body: &str) -> UpdateOutcome {
        let request = UpdateRequest::parse_form(body);
        self.apply(&request)
    }

    /// Ersetzt den Zustand und rendert sofort den kompletten Frame
    pub fn apply(&mut self, request: &UpdateRequest) -> UpdateOutcome {
        let state = self.store.apply(request);
        let render = self.engine.render(&state);
        UpdateOutcome {
            state,
            render,
            redirect: Redirect::SEE_OTHER_ROOT,
        }
    }

    /// Schreibt die Einstellungs-Seite für den aktuellen Zustand
    pub fn render_page<O: fmt::Write>(&self, out: &mut O) -> fmt::Result {
        page::render_page(&self.store.read(), out)
    }

    pub fn engine(&self) -> &RenderEngine<W> {
        &self.engine
    }
}
