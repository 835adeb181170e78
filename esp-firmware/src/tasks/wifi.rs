// WiFi Task - Verbindet mit WLAN und hält die Verbindung
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{
    HTTP_PORT, NETWORK_POLL_MILLIS, WIFI_PASSWORD, WIFI_RECONNECT_DELAY_SECS,
    WIFI_RETRY_DELAY_SECS, WIFI_SSID,
};

/// WiFi Connection Task
///
/// Verbindet als Station mit dem Access Point und versucht es endlos
/// erneut, solange Start oder Connect fehlschlagen. Nach einem Disconnect
/// wird nach kurzer Pause neu verbunden.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Connecting to '{}'", WIFI_SSID);

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            let client_config = ModeConfig::Client(
                ClientConfig::default()
                    .with_ssid(WIFI_SSID.into())
                    .with_password(WIFI_PASSWORD.into()),
            );

            if let Err(e) = controller.set_config(&client_config) {
                error!("WiFi: Failed to set configuration: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WiFi: Failed to start: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            info!("WiFi: Started");
        }

        match controller.connect_async().await {
            Ok(_) => info!("WiFi: Connected"),
            Err(e) => {
                warn!("WiFi: Connection failed: {}, retrying", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }
        }

        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WiFi: Disconnected from AP, will retry...");

        Timer::after(Duration::from_secs(WIFI_RECONNECT_DELAY_SECS)).await;
    }
}

/// Network Task
///
/// Treibt den embassy-net Stack (Pakete, TCP/IP).
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Wartet auf Link und IP-Adresse und loggt dann, unter welcher Adresse
/// die Web-UI erreichbar ist.
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    while !stack.is_link_up() {
        Timer::after(Duration::from_millis(NETWORK_POLL_MILLIS)).await;
    }

    info!("WiFi: Link is up, waiting for IP address...");

    loop {
        if let Some(config) = stack.config_v4() {
            info!("WiFi: Got IP address!");
            info!("  IP:      {}", Debug2Format(&config.address.address()));
            info!("  Gateway: {}", Debug2Format(&config.gateway));
            info!(
                "  Web UI:  http://{}:{}/",
                Debug2Format(&config.address.address()),
                HTTP_PORT
            );
            break;
        }
        Timer::after(Duration::from_millis(NETWORK_POLL_MILLIS)).await;
    }
}
