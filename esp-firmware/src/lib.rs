// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap für die HTML-Seite und picoserve
extern crate alloc;

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod web;

// Re-exports von esp-core
pub use esp_core::{LedController, LedError, LedState, StripWriter, UpdateOutcome};

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;

use crate::hal::RmtStripWriter;

// ============================================================================
// Type-Aliase für den geteilten Controller
// ============================================================================
//
// Es gibt genau einen Controller. main() legt ihn in eine StaticCell und
// gibt die &'static Referenz an den HTTP-Task weiter. Nur dieser Task
// sperrt den Mutex.

/// Controller mit echtem RMT-Strip
pub type StripController = LedController<RmtStripWriter<'static>>;

/// Controller hinter async Mutex (NoopRawMutex: alles läuft im selben Executor)
pub type SharedController = Mutex<NoopRawMutex, StripController>;

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal,
// esp-radio, picoserve-Embassy). Deshalb liegt die komplette Logik
// (Parser, Store, Render-Engine, HTML) in esp-core und wird in esp-tests
// auf dem Host mit einem MockStripWriter getestet. Hier bleibt nur
// Hardware- und Netzwerk-Verdrahtung.
