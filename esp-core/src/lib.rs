//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert das LED-Modell, den Formular-Parser, die Render-Engine,
//! den HTML-Generator und den Writer-Trait für den Strip.

#![no_std]

pub mod controller;
pub mod engine;
pub mod form;
pub mod logic;
pub mod page;
pub mod store;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{LedController, UpdateOutcome};
pub use engine::RenderEngine;
pub use form::{SELECT_ALL_SENTINEL, UpdateRequest};
pub use logic::{parse_bounded_int, render_frame};
pub use page::render_page;
pub use store::LedStateStore;
pub use traits::{LedError, StripWriter};
pub use types::{HsvColor, LedState, MAX_LEDS, Redirect};
