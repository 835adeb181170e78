//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{HsvColor, LedState, MAX_LEDS};

/// Liest eine Ganzzahl tolerant und begrenzt sie auf `[min, max]`
///
/// Verhalten wie `atol`: führende Leerzeichen, optionales Vorzeichen, dann
/// Ziffern. Alles nach der letzten Ziffer wird ignoriert. Ohne Ziffern gilt
/// `default`. Das Ergebnis wird immer geklemmt (auch `default`).
///
/// # Beispiele
///
/// ```
/// # use esp_core::parse_bounded_int;
/// assert_eq!(parse_bounded_int("42", 0, 0, 255), 42);
/// assert_eq!(parse_bounded_int("300", 0, 0, 255), 255);
/// assert_eq!(parse_bounded_int("-7", 0, 0, 255), 0);
/// assert_eq!(parse_bounded_int("abc", 9, 0, 255), 9);
/// assert_eq!(parse_bounded_int("12px", 0, 0, 255), 12);
/// ```
pub fn parse_bounded_int(text: &str, default: i32, min: i32, max: i32) -> i32 {
    parse_leading_int(text).unwrap_or(default).clamp(min, max)
}

/// Liest die führende Ganzzahl aus `text`, `None` wenn keine Ziffer folgt
///
/// Zu große Werte saturieren bei `i32::MIN` / `i32::MAX`.
pub fn parse_leading_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut magnitude: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }

    let signed = if negative { -magnitude } else { magnitude };
    Some(signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Berechnet den kompletten Frame (MAX_LEDS Farben) aus dem Zustand
///
/// LED `i` leuchtet mit `HSV(hue, saturation, value)` wenn sie im aktiven
/// Bereich liegt und in der Maske an ist, sonst `HSV(hue, saturation, 0)`.
pub fn render_frame(state: &LedState) -> [HsvColor; MAX_LEDS] {
    let on = state.color();
    let off = on.dark();

    let mut frame = [off; MAX_LEDS];
    for (index, color) in frame.iter_mut().enumerate() {
        if state.is_on(index) {
            *color = on;
        }
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded_int_plain() {
        assert_eq!(parse_bounded_int("10", 0, 0, 255), 10);
        assert_eq!(parse_bounded_int("  200", 0, 0, 255), 200);
        assert_eq!(parse_bounded_int("+5", 0, 0, 255), 5);
    }

    #[test]
    fn test_parse_bounded_int_clamps() {
        assert_eq!(parse_bounded_int("256", 0, 0, 255), 255);
        assert_eq!(parse_bounded_int("-1", 0, 0, 255), 0);
        assert_eq!(parse_bounded_int("99999999999999999999", 0, 0, 150), 150);
        assert_eq!(parse_bounded_int("", 500, 0, 150), 150);
    }

    #[test]
    fn test_parse_bounded_int_default_on_garbage() {
        assert_eq!(parse_bounded_int("", 0, 0, 255), 0);
        assert_eq!(parse_bounded_int("all", 3, 0, 255), 3);
        assert_eq!(parse_bounded_int("-", 7, 0, 255), 7);
    }

    #[test]
    fn test_parse_leading_int_trailing_garbage() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("-3.5"), Some(-3));
        assert_eq!(parse_leading_int("x12"), None);
    }

    #[test]
    fn test_render_frame_only_active_leds_lit() {
        let mut state = LedState::default();
        state.on_mask[0] = true;
        state.on_mask[5] = true;
        state.on_mask[6] = true; // ausserhalb von active_count = 6

        let frame = render_frame(&state);

        assert_eq!(frame[0], HsvColor::new(30, 255, 30));
        assert_eq!(frame[1], HsvColor::new(30, 255, 0));
        assert_eq!(frame[5], HsvColor::new(30, 255, 30));
        assert_eq!(frame[6], HsvColor::new(30, 255, 0));
        assert_eq!(frame[MAX_LEDS - 1], HsvColor::new(30, 255, 0));
    }
}
