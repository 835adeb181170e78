//! Render Engine
//!
//! Wandelt den [`LedState`] in einen RGB-Frame und schiebt ihn komplett
//! auf den Strip.

use rgb::RGB8;

use crate::logic::render_frame;
use crate::traits::{LedError, StripWriter};
use crate::types::{LedState, MAX_LEDS};

pub struct RenderEngine<W: StripWriter> {
    writer: W,
    frame: [RGB8; MAX_LEDS],
}

impl<W: StripWriter> RenderEngine<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); MAX_LEDS],
        }
    }

    /// Rendert den Zustand und schreibt alle MAX_LEDS Farben
    pub fn render(&mut self, state: &LedState) -> Result<(), LedError> {
        for (pixel, color) in self.frame.iter_mut().zip(render_frame(state)) {
            *pixel = color.to_rgb();
        }
        self.writer.write_frame(&self.frame)
    }

    /// Erstes Rendern nach dem Einschalten
    ///
    /// Der Strip ignoriert den ersten Frame nach Power-On, deshalb wird
    /// zweimal geschrieben. Nur beim Booten aufrufen.
    pub fn warm_up(&mut self, state: &LedState) -> Result<(), LedError> {
        let first = self.render(state);
        self.render(state).and(first)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}
