//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

/// Maximale Anzahl adressierbarer LEDs im Strip
///
/// Bestimmt die Frame-Länge der Render-Engine und die Größe der On-Maske.
pub const MAX_LEDS: usize = 150;

/// Start-Werte nach dem Booten
pub const DEFAULT_HUE: u8 = 30;
pub const DEFAULT_SATURATION: u8 = 255;
pub const DEFAULT_VALUE: u8 = 30;
pub const DEFAULT_ACTIVE_COUNT: u16 = 6;

/// HSV-Farbwert einer einzelnen LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsvColor {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl HsvColor {
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Gleicher Farbton, Helligkeit 0
    pub const fn dark(self) -> Self {
        Self { value: 0, ..self }
    }

    /// Konvertiert nach RGB für den Strip (smart-leds Rainbow-Mapping)
    pub fn to_rgb(self) -> RGB8 {
        hsv2rgb(Hsv {
            hue: self.hue,
            sat: self.saturation,
            val: self.value,
        })
    }
}

/// Kompletter LED-Zustand
///
/// Wird vom Update-Handler ersetzt und von Render-Engine und Web-UI gelesen.
/// `on_mask[i]` hat nur Bedeutung solange `i < active_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedState {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
    pub active_count: u16,
    pub on_mask: [bool; MAX_LEDS],
}

impl LedState {
    /// Basis-Farbe mit voller konfigurierter Helligkeit
    pub const fn color(&self) -> HsvColor {
        HsvColor::new(self.hue, self.saturation, self.value)
    }

    /// Ist LED `index` an? Indizes ab `active_count` sind immer aus.
    pub fn is_on(&self, index: usize) -> bool {
        index < self.active_len() && self.on_mask[index]
    }

    /// `active_count` als Slice-Länge, nie größer als MAX_LEDS
    pub fn active_len(&self) -> usize {
        usize::from(self.active_count).min(MAX_LEDS)
    }

    /// Anzahl eingeschalteter LEDs im aktiven Bereich
    pub fn lit_count(&self) -> usize {
        self.on_mask[..self.active_len()]
            .iter()
            .filter(|on| **on)
            .count()
    }
}

// [bool; 150] hat kein Default, daher manuell
impl Default for LedState {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            value: DEFAULT_VALUE,
            active_count: DEFAULT_ACTIVE_COUNT,
            on_mask: [false; MAX_LEDS],
        }
    }
}

/// HTTP-Redirect den der Update-Handler immer zurückgibt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub status: u16,
    pub location: &'static str,
}

impl Redirect {
    /// 303 See Other auf die Startseite (verhindert Resubmit beim Reload)
    pub const SEE_OTHER_ROOT: Self = Self {
        status: 303,
        location: "/",
    };
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for HsvColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "HSV({}, {}, {})",
            self.hue,
            self.saturation,
            self.value
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LedState {{ hue: {}, saturation: {}, value: {}, num_leds: {}, on: {} }}",
            self.hue,
            self.saturation,
            self.value,
            self.active_count,
            self.lit_count()
        )
    }
}
