// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi und HTML-Seite benötigen dynamischen Speicher)
extern crate alloc;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;
use esp_hal_smartled::smart_led_buffer;
use static_cell::StaticCell;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use esp_led_strip::config::{
    EXTRA_HEAP_SIZE, LED_GPIO_PIN, MAX_LEDS, NET_SOCKET_COUNT, RMT_CLOCK_MHZ, WIFI_HEAP_SIZE,
};
use esp_led_strip::hal::{RmtStripWriter, StripBuffer};
use esp_led_strip::tasks::{connection_task, dhcp_task, http_server_task, net_task};
use esp_led_strip::{LedController, SharedController};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und LED-Strip, rendert den Default-Zustand,
/// startet WiFi und den HTTP-Server. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Zwei Heap-Bereiche: reclaimed RAM (64 KB) + extra (36 KB)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // ------------------------------------------------------------------------
    // LED-Strip
    // ------------------------------------------------------------------------
    info!("LED: Init ({} LEDs on GPIO{})", MAX_LEDS, LED_GPIO_PIN);

    // RMT-Buffer ist zu groß für den Stack (~14 KB bei 150 LEDs)
    static STRIP_BUFFER: StaticCell<StripBuffer> = StaticCell::new();
    let strip_buffer = STRIP_BUFFER.init_with(|| smart_led_buffer!(MAX_LEDS));

    let writer = RmtStripWriter::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        strip_buffer,
    )
    .expect("Failed to initialize RMT for LED strip");

    let mut controller = LedController::new(writer);
    // Doppelter Write: der erste Frame nach Power-On wird vom Strip ignoriert
    if let Err(e) = controller.start() {
        error!("LED: Initial render failed: {}", e);
    }
    info!("LED: Initial state {}", controller.state());

    static CONTROLLER: StaticCell<SharedController> = StaticCell::new();
    let controller = &*CONTROLLER.init(Mutex::new(controller));

    // ------------------------------------------------------------------------
    // WiFi + Netzwerk
    // ------------------------------------------------------------------------
    static RADIO_INIT: StaticCell<esp_radio::Controller> = StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    static RESOURCES: StaticCell<StackResources<NET_SOCKET_COUNT>> = StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: StaticCell<Stack<'static>> = StaticCell::new();
    let stack = &*STACK.init(stack);

    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_task(stack)).unwrap();

    // Ein einziger HTTP-Task: Requests laufen strikt nacheinander
    spawner.spawn(http_server_task(stack, controller)).unwrap();

    info!("All done :)");

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
