// Strip Writer für den echten WS2812-Strip
//
// Implementiert den StripWriter-Trait aus esp-core über das RMT Peripheral.
// Mock-Implementierung für Tests liegt in esp-tests.

use esp_core::{LedError, StripWriter};
use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::STRIP_BUFFER_SIZE;

/// RMT-Pulse-Buffer für den kompletten Strip
pub type StripBuffer = [PulseCode; STRIP_BUFFER_SIZE];

/// Real Hardware Strip Writer
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er in main() über eine
/// StaticCell erstellt und als Parameter übergeben.
pub struct RmtStripWriter<'a> {
    strip: SmartLedsAdapter<'a, STRIP_BUFFER_SIZE>,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(MAX_LEDS))
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut StripBuffer,
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::InitFailed)?;

        let strip = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { strip })
    }
}

impl<'a> StripWriter for RmtStripWriter<'a> {
    fn write_frame(&mut self, frame: &[RGB8]) -> Result<(), LedError> {
        self.strip
            .write(frame.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
