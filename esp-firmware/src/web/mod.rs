// Web-Modul: HTML-Seite und HTTP-Antworten
//
// Die Seite selbst erzeugt esp-core::render_page; hier wird sie nur in
// einen Heap-String geschrieben und in picoserve-Responses verpackt.

use alloc::string::String;
use esp_core::{LedState, Redirect, render_page};
use picoserve::response::{IntoResponse, Response, StatusCode};

/// Start-Kapazität für die Seite (Kopf ~1.5 KB + ~85 Bytes pro Checkbox)
const PAGE_CAPACITY: usize = 2048;

/// Rendert die Einstellungs-Seite in einen String
pub fn index_page(state: &LedState) -> String {
    let mut html = String::with_capacity(PAGE_CAPACITY + usize::from(state.active_count) * 96);
    // fmt::Write auf alloc::String kann nicht fehlschlagen
    let _ = render_page(state, &mut html);
    html
}

/// 200 OK mit HTML-Body
pub fn html_response(html: String) -> impl IntoResponse {
    Response::new(StatusCode::OK, html).with_header("Content-Type", "text/html; charset=utf-8")
}

/// Redirect ohne Body (303 See Other → /)
pub fn redirect_response(redirect: Redirect) -> impl IntoResponse {
    Response::new(StatusCode::new(redirect.status), "").with_header("Location", redirect.location)
}
