// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Maximale LED-Anzahl (kommt aus esp-core, damit Host-Tests den gleichen
/// Wert sehen)
pub use esp_core::MAX_LEDS;

/// GPIO-Pin für die Datenleitung des LED-Strips (WS2812/Neopixel)
/// Siehe `hal::strip_writer::RmtStripWriter::new` - der Pin-Typ ist dort fest verdrahtet
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT-Buffer-Größe: 24 Pulse pro LED (3 Farben * 8 Bits) + 1 Reset
pub const STRIP_BUFFER_SIZE: usize = MAX_LEDS * 24 + 1;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach fehlgeschlagenem Start/Connect
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Wartezeit nach Verbindungsabbruch bis zum Reconnect
pub const WIFI_RECONNECT_DELAY_SECS: u64 = 2;

/// Poll-Intervall beim Warten auf Link und DHCP
pub const NETWORK_POLL_MILLIS: u64 = 500;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
/// HTML-Seite wird als String im Heap gebaut (~15 KB bei 150 LEDs)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

/// Anzahl Sockets für embassy-net (DHCP + HTTP-Listener)
pub const NET_SOCKET_COUNT: usize = 3;

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP Port
pub const HTTP_PORT: u16 = 80;

/// HTTP Buffer-Größe in Bytes
/// Muss den kompletten Formular-Body aufnehmen können:
/// 4 Skalare + bis zu 150 `leds%5B%5D=NNN&` Felder ≈ 2.6 KB
pub const HTTP_BUFFER_SIZE: usize = 4096;

/// TCP RX Buffer-Größe in Bytes
/// Für eingehende TCP-Daten vom Client
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
/// Für ausgehende TCP-Daten zum Client
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Timeouts für picoserve (Sekunden)
pub const HTTP_START_READ_TIMEOUT_SECS: u64 = 5;
pub const HTTP_READ_TIMEOUT_SECS: u64 = 1;
pub const HTTP_WRITE_TIMEOUT_SECS: u64 = 1;
