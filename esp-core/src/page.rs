//! Web UI Generator
//!
//! Erzeugt die Einstellungs-Seite als HTML. Reine Funktion des Zustands,
//! schreibt in jeden `core::fmt::Write` (heapless- oder alloc-String).

use core::fmt::{self, Write};

use crate::form::{
    FIELD_ALL_LIGHTS, FIELD_HUE, FIELD_LEDS, FIELD_NUM_LEDS, FIELD_SATURATION, FIELD_VALUE,
    SELECT_ALL_SENTINEL,
};
use crate::types::{LedState, MAX_LEDS};

// Statischer Kopf (Style + Script), zur Compile-Zeit eingebettet
const PAGE_HEAD: &str = include_str!("page/head.html");

/// Checkboxen pro optischem Block
pub const CHECKBOXES_PER_BLOCK: usize = 10;

/// Schreibt die komplette Seite
///
/// Die Reihenfolge der Felder (hue, saturation, value, num_leds, all_lights,
/// leds[]) entspricht der alten Positions-Regel des Update-Handlers.
pub fn render_page<W: Write>(state: &LedState, out: &mut W) -> fmt::Result {
    out.write_str(PAGE_HEAD)?;
    out.write_str("<body onload=\"sync_all()\">\n<h1>LED Settings</h1>\n")?;
    out.write_str("<form action=\"update\" method=\"post\" id=\"settings\">\n")?;

    number_input(out, FIELD_HUE, "Hue", state.hue.into(), 255)?;
    number_input(out, FIELD_SATURATION, "Saturation", state.saturation.into(), 255)?;
    number_input(out, FIELD_VALUE, "Value", state.value.into(), 255)?;
    number_input(
        out,
        FIELD_NUM_LEDS,
        "LED Count",
        state.active_count.into(),
        MAX_LEDS,
    )?;

    out.write_str("<div style=\"width: fit-content; margin: 3px auto\">")?;
    out.write_str("<label class=\"divider\">Lights:</label>")?;
    write!(
        out,
        "<input type=\"checkbox\" id=\"all_lights\" name=\"{FIELD_ALL_LIGHTS}\" \
         value=\"{SELECT_ALL_SENTINEL}\" onclick=\"toggle_all()\" />"
    )?;
    out.write_str("<span class=\"divider\">All</span><span class=\"divider\">|</span>\n")?;

    out.write_str("<div class=\"block\">")?;
    for index in 0..state.active_len() {
        let checked = if state.on_mask[index] {
            " checked=\"checked\""
        } else {
            ""
        };
        write!(
            out,
            "<input type=\"checkbox\" class=\"light\" name=\"{FIELD_LEDS}\" \
             value=\"{index}\"{checked} onclick=\"sync_all()\" />"
        )?;

        if index % CHECKBOXES_PER_BLOCK == CHECKBOXES_PER_BLOCK - 1 {
            out.write_str("<span class=\"divider\">|</span></div>\n<div class=\"block\">")?;
        }
    }
    out.write_str("</div>\n</div>\n<div style=\"clear: both\"></div>\n</form>\n")?;

    out.write_str("<button type=\"submit\" form=\"settings\">UPDATE</button>\n")?;
    out.write_str("</body>\n</html>\n")
}

fn number_input<W: Write>(
    out: &mut W,
    name: &str,
    label: &str,
    value: usize,
    max: usize,
) -> fmt::Result {
    write!(
        out,
        "<label for=\"{name}\">{label}:</label>\
         <input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"0\" max=\"{max}\" \
         value=\"{value}\" /><br />\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    fn page(state: &LedState) -> String<20000> {
        let mut out = String::new();
        render_page(state, &mut out).unwrap();
        out
    }

    #[test]
    fn test_page_prefills_numbers() {
        let html = page(&LedState::default());
        assert!(html.contains("name=\"hue\" min=\"0\" max=\"255\" value=\"30\""));
        assert!(html.contains("name=\"saturation\" min=\"0\" max=\"255\" value=\"255\""));
        assert!(html.contains("name=\"num_leds\" min=\"0\" max=\"150\" value=\"6\""));
    }

    #[test]
    fn test_page_field_order_matches_positional_rule() {
        let html = page(&LedState::default());
        let hue = html.find("name=\"hue\"").unwrap();
        let saturation = html.find("name=\"saturation\"").unwrap();
        let value = html.find("name=\"value\"").unwrap();
        let num_leds = html.find("name=\"num_leds\"").unwrap();
        let all = html.find("name=\"all_lights\"").unwrap();
        let first_led = html.find("name=\"leds[]\"").unwrap();
        assert!(hue < saturation && saturation < value && value < num_leds);
        assert!(num_leds < all && all < first_led);
    }

    #[test]
    fn test_page_blocks_of_ten() {
        let mut state = LedState::default();
        state.active_count = 25;
        let html = page(&state);
        // Ein Start-Block plus ein neuer Block nach LED 9 und nach LED 19
        assert_eq!(html.matches("<div class=\"block\">").count(), 3);
    }
}
