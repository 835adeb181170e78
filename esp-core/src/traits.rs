//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Peripheral konnte nicht initialisiert werden
    InitFailed,
    /// Frame konnte nicht geschrieben werden
    WriteFailed,
}

/// Trait für den LED-Strip (Strip Renderer)
///
/// Nimmt immer einen kompletten Frame entgegen, keine Delta-Updates.
///
/// # Implementierungen
/// - **Production:** RmtStripWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockStripWriter (in-memory Mock)
pub trait StripWriter: Send {
    /// Schreibt alle Farben der Reihe nach auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), LedError>;
}
