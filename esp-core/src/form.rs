//! Formular-Parser für `POST /update`
//!
//! Dekodiert `application/x-www-form-urlencoded` Bodies in eine
//! [`UpdateRequest`]. Felder werden über ihren Namen zugeordnet; nur wenn
//! keiner der vier Skalar-Namen vorkommt, greift die alte Positions-Regel
//! (Feld 0..3 = hue, saturation, value, num_leds, danach LED-Indizes).

use heapless::{String, Vec};

use crate::logic::{parse_bounded_int, parse_leading_int};
use crate::types::MAX_LEDS;

/// Feldnamen, wie sie die Web-UI sendet
pub const FIELD_HUE: &str = "hue";
pub const FIELD_SATURATION: &str = "saturation";
pub const FIELD_VALUE: &str = "value";
pub const FIELD_NUM_LEDS: &str = "num_leds";
pub const FIELD_LEDS: &str = "leds[]";
pub const FIELD_ALL_LIGHTS: &str = "all_lights";

/// Wert der "Alle"-Checkbox. Felder mit genau diesem Wert sind nie ein
/// LED-Index und werden übersprungen, egal unter welchem Namen sie kommen.
pub const SELECT_ALL_SENTINEL: &str = "all";

/// Maximale Länge eines Namens oder Werts mit `%XX`/`+` Escapes.
/// Unkodierte Felder werden direkt aus dem Body gelesen und nie gekürzt.
const MAX_TOKEN_LEN: usize = 32;

type Token = String<MAX_TOKEN_LEN>;

/// Name oder Wert eines Formular-Felds
///
/// Felder ohne Escapes zeigen direkt in den Body. Nicht dekodierbare
/// Felder (kaputtes `%XX`, zu lang) werden zu `Raw("")`: sie bleiben an
/// ihrer Position und zählen als nicht parsebare Zahl.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormText<'a> {
    Raw(&'a str),
    Decoded(Token),
}

impl FormText<'_> {
    fn as_str(&self) -> &str {
        match self {
            FormText::Raw(text) => text,
            FormText::Decoded(token) => token.as_str(),
        }
    }
}

impl AsRef<str> for FormText<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Vollständiges Update aus einem Formular-Submit
///
/// Werte sind bereits geklemmt; `on_indices` enthält nur Indizes
/// `< active_count`, ohne Duplikate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
    pub active_count: u16,
    pub on_indices: Vec<u16, MAX_LEDS>,
}

/// Skalar-Rohwerte vor dem Klemmen
#[derive(Default)]
struct ScalarFields<'a> {
    hue: Option<FormText<'a>>,
    saturation: Option<FormText<'a>>,
    value: Option<FormText<'a>>,
    num_leds: Option<FormText<'a>>,
}

impl ScalarFields<'_> {
    fn any(&self) -> bool {
        self.hue.is_some()
            || self.saturation.is_some()
            || self.value.is_some()
            || self.num_leds.is_some()
    }
}

impl UpdateRequest {
    /// Parst einen urlencoded Body
    ///
    /// Schlägt nie fehl: fehlende oder kaputte Zahlen werden zu 0, zu große
    /// Werte werden geklemmt, ungültige LED-Indizes ignoriert.
    pub fn parse_form(body: &str) -> Self {
        // Erster Durchlauf: Skalare, damit num_leds vor den Indizes bekannt ist
        let mut scalars = ScalarFields::default();
        for (name, value) in form_pairs(body) {
            let slot = match name.as_str() {
                FIELD_HUE => &mut scalars.hue,
                FIELD_SATURATION => &mut scalars.saturation,
                FIELD_VALUE => &mut scalars.value,
                FIELD_NUM_LEDS => &mut scalars.num_leds,
                _ => continue,
            };
            *slot = Some(value);
        }

        if !scalars.any() {
            return Self::from_positional(form_pairs(body).map(|(_, value)| value));
        }

        let leds = form_pairs(body)
            .filter(|(name, _)| name.as_str() == FIELD_LEDS)
            .map(|(_, value)| value);
        Self::from_fields(
            as_text(&scalars.hue),
            as_text(&scalars.saturation),
            as_text(&scalars.value),
            as_text(&scalars.num_leds),
            leds,
        )
    }

    /// Alte Positions-Regel: die ersten vier Werte sind hue, saturation,
    /// value, num_leds; alle weiteren sind LED-Indizes.
    pub fn from_positional<T: AsRef<str>>(values: impl IntoIterator<Item = T>) -> Self {
        let mut values = values.into_iter();
        let hue = values.next();
        let saturation = values.next();
        let value = values.next();
        let num_leds = values.next();
        Self::from_fields(
            as_text(&hue),
            as_text(&saturation),
            as_text(&value),
            as_text(&num_leds),
            values,
        )
    }

    fn from_fields<T: AsRef<str>>(
        hue: Option<&str>,
        saturation: Option<&str>,
        value: Option<&str>,
        num_leds: Option<&str>,
        leds: impl IntoIterator<Item = T>,
    ) -> Self {
        let active_count =
            parse_bounded_int(num_leds.unwrap_or(""), 0, 0, MAX_LEDS as i32) as u16;

        let mut on_indices: Vec<u16, MAX_LEDS> = Vec::new();
        for raw in leds {
            let raw = raw.as_ref();
            if raw == SELECT_ALL_SENTINEL {
                continue;
            }
            let Some(index) = parse_led_index(raw, active_count) else {
                continue;
            };
            if !on_indices.contains(&index) {
                // Kapazität reicht: höchstens active_count <= MAX_LEDS Indizes
                let _ = on_indices.push(index);
            }
        }

        Self {
            hue: parse_channel(hue),
            saturation: parse_channel(saturation),
            value: parse_channel(value),
            active_count,
            on_indices,
        }
    }
}

fn as_text<T: AsRef<str>>(value: &Option<T>) -> Option<&str> {
    value.as_ref().map(|v| v.as_ref())
}

fn parse_channel(text: Option<&str>) -> u8 {
    parse_bounded_int(text.unwrap_or(""), 0, 0, 255) as u8
}

/// LED-Index nur wenn parsebar und im aktiven Bereich
fn parse_led_index(text: &str, active_count: u16) -> Option<u16> {
    let index = parse_leading_int(text)?;
    if index < 0 || index >= i32::from(active_count) {
        return None;
    }
    u16::try_from(index).ok()
}

/// Iteriert über `(name, value)` Paare
///
/// Jedes nicht-leere Paar wird geliefert, auch wenn es nicht dekodierbar
/// ist, damit die Positions-Regel nicht verrutscht.
fn form_pairs(body: &str) -> impl Iterator<Item = (FormText<'_>, FormText<'_>)> {
    body.split('&').filter(|pair| !pair.is_empty()).map(|pair| {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_component(name), decode_component(value))
    })
}

/// URL-Dekodierung einer Komponente, nur wenn sie Escapes enthält
fn decode_component(raw: &str) -> FormText<'_> {
    if !raw.contains(['%', '+']) {
        return FormText::Raw(raw);
    }
    decode_escaped(raw).map_or(FormText::Raw(""), FormText::Decoded)
}

/// `+` → Leerzeichen, `%XX` → Byte; `None` bei kaputtem Escape oder zu lang
fn decode_escaped(raw: &str) -> Option<Token> {
    let mut bytes: Vec<u8, MAX_TOKEN_LEN> = Vec::new();
    let mut input = raw.bytes();

    while let Some(byte) = input.next() {
        let decoded = match byte {
            b'+' => b' ',
            b'%' => {
                let high = hex_value(input.next()?)?;
                let low = hex_value(input.next()?)?;
                (high << 4) | low
            }
            other => other,
        };
        bytes.push(decoded).ok()?;
    }

    String::from_utf8(bytes).ok()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

// ============================================================================
// defmt::Format Implementation (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for UpdateRequest {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "UpdateRequest {{ hue: {}, saturation: {}, value: {}, num_leds: {}, on: {=[u16]} }}",
            self.hue,
            self.saturation,
            self.value,
            self.active_count,
            self.on_indices.as_slice()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_by_name() {
        let req = UpdateRequest::parse_form(
            "hue=10&saturation=200&value=50&num_leds=3&all_lights=all&leds%5B%5D=1",
        );
        assert_eq!(req.hue, 10);
        assert_eq!(req.saturation, 200);
        assert_eq!(req.value, 50);
        assert_eq!(req.active_count, 3);
        assert_eq!(req.on_indices.as_slice(), &[1]);
    }

    #[test]
    fn test_parse_form_field_order_irrelevant() {
        let req = UpdateRequest::parse_form("leds[]=0&num_leds=2&value=7&saturation=8&hue=9");
        assert_eq!((req.hue, req.saturation, req.value), (9, 8, 7));
        assert_eq!(req.active_count, 2);
        assert_eq!(req.on_indices.as_slice(), &[0]);
    }

    #[test]
    fn test_parse_form_positional_fallback() {
        let req = UpdateRequest::parse_form("a=10&b=200&c=50&d=3&e=all&f=1&g=2");
        assert_eq!(req.hue, 10);
        assert_eq!(req.active_count, 3);
        assert_eq!(req.on_indices.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_sentinel_skipped_in_leds_field() {
        let req = UpdateRequest::parse_form("hue=1&saturation=1&value=1&num_leds=4&leds[]=all&leds[]=3");
        assert_eq!(req.on_indices.as_slice(), &[3]);
    }

    #[test]
    fn test_invalid_indices_ignored() {
        let req = UpdateRequest::parse_form(
            "hue=1&saturation=1&value=1&num_leds=3&leds[]=5&leds[]=x&leds[]=-1&leds[]=3",
        );
        assert!(req.on_indices.is_empty());
    }

    #[test]
    fn test_duplicate_indices_collapsed() {
        let req = UpdateRequest::parse_form("hue=1&saturation=1&value=1&num_leds=3&leds[]=2&leds[]=2");
        assert_eq!(req.on_indices.as_slice(), &[2]);
    }

    #[test]
    fn test_missing_and_garbage_scalars_default_to_zero() {
        let req = UpdateRequest::parse_form("hue=abc&num_leds=999");
        assert_eq!(req.hue, 0);
        assert_eq!(req.saturation, 0);
        assert_eq!(req.value, 0);
        assert_eq!(req.active_count, MAX_LEDS as u16);
    }

    #[test]
    fn test_empty_body() {
        let req = UpdateRequest::parse_form("");
        assert_eq!(req.active_count, 0);
        assert!(req.on_indices.is_empty());
    }

    #[test]
    fn test_positional_keeps_slot_of_broken_escape() {
        let req = UpdateRequest::parse_form("a=10&b=%ZZ&c=50&d=3&e=1");
        assert_eq!((req.hue, req.saturation, req.value), (10, 0, 50));
        assert_eq!(req.active_count, 3);
        assert_eq!(req.on_indices.as_slice(), &[1]);
    }

    #[test]
    fn test_positional_keeps_slot_of_overlong_escaped_value() {
        let body = "a=10&b=1%2B1111111111111111111111111111111111&c=50&d=3&e=2";
        let req = UpdateRequest::parse_form(body);
        assert_eq!((req.hue, req.saturation, req.value), (10, 0, 50));
        assert_eq!(req.active_count, 3);
        assert_eq!(req.on_indices.as_slice(), &[2]);
    }

    #[test]
    fn test_long_unescaped_number_not_truncated() {
        let req = UpdateRequest::parse_form(
            "hue=000000000000000000000000000000000000000010&saturation=1&value=1&num_leds=3",
        );
        assert_eq!(req.hue, 10);
        assert_eq!(req.active_count, 3);
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("leds%5B%5D").as_str(), "leds[]");
        assert_eq!(decode_component("a+b").as_str(), "a b");
        assert_eq!(decode_component("%zz").as_str(), "");
        assert_eq!(decode_component("%4").as_str(), "");
    }
}
