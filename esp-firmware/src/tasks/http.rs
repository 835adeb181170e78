// HTTP Server Task - Serviert die Einstellungs-Seite und nimmt Updates an
use alloc::vec::Vec;
use defmt::{error, info, warn};
use embassy_net::Stack;
use embassy_time::Duration;
use picoserve::response::IntoResponse;
use picoserve::routing::{get, post};

use crate::SharedController;
use crate::config::*;
use crate::web::{html_response, index_page, redirect_response};

/// HTTP Server Task
///
/// Stellt die Web-UI bereit:
/// - `GET /` liefert das Formular mit dem aktuellen Zustand
/// - `POST /update` übernimmt das Formular, rendert den Strip und leitet
///   mit 303 auf `/` zurück
///
/// **Kein Task-Pool:** Genau eine Instanz, damit jeder Request inklusive
/// Strip-Write fertig ist bevor der nächste angenommen wird.
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `controller`: der einzige LED-Controller (State Store + Render Engine)
#[embassy_executor::task]
pub async fn http_server_task(
    stack: &'static Stack<'static>,
    controller: &'static SharedController,
) {
    info!("HTTP: Server starting on port {}...", HTTP_PORT);

    let app = picoserve::Router::new()
        .route("/", get(move || serve_index(controller)))
        .route(
            "/update",
            post(move |body: Vec<u8>| handle_update(controller, body)),
        );

    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(HTTP_START_READ_TIMEOUT_SECS)),
        read_request: Some(Duration::from_secs(HTTP_READ_TIMEOUT_SECS)),
        write: Some(Duration::from_secs(HTTP_WRITE_TIMEOUT_SECS)),
        persistent_start_read_request: Some(Duration::from_secs(HTTP_START_READ_TIMEOUT_SECS)),
    })
    .keep_connection_alive();

    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    let _ = server
        .listen_and_serve(0, *stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await;

    warn!("HTTP: Server task ended");
}

/// `GET /` - Formular mit aktuellem Zustand
async fn serve_index(controller: &'static SharedController) -> impl IntoResponse {
    let state = controller.lock().await.state();
    html_response(index_page(&state))
}

/// `POST /update` - Formular übernehmen, Strip rendern, Redirect
///
/// Antwortet immer mit 303, auch wenn Felder nicht parsebar sind oder der
/// Strip-Write fehlschlägt. Ungültiges UTF-8 zählt als leerer Body.
async fn handle_update(controller: &'static SharedController, body: Vec<u8>) -> impl IntoResponse {
    let body = core::str::from_utf8(&body).unwrap_or_else(|_| {
        warn!("HTTP: Update body is not UTF-8, treating as empty");
        ""
    });

    let outcome = controller.lock().await.handle_update(body);
    let state = outcome.state;

    info!(
        "Hue: {}, saturation: {}, value: {}, num_leds: {}, on: {}",
        state.hue,
        state.saturation,
        state.value,
        state.active_count,
        state.lit_count()
    );

    if let Err(e) = outcome.render {
        error!("LED: Failed to write frame: {}", e);
    }

    redirect_response(outcome.redirect)
}
