//! Query string tokenizer and value parsers.

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::RangeInclusive;

use super::ParseWarning;
use super::instructions::{
    DIAMETER_MM_RANGE, DPI_RANGE, Instructions, MARGIN_MM_RANGE, OFFSET_RANGE, ROTATION_RANGE,
    SCALE_RANGE, SPACING_MM_RANGE,
};
use crate::log::trace;
use crate::pack::LayoutKind;

/// Parse a query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        dispatch_key(&key, &value, &mut inst, &mut warnings);
    }

    trace!(warnings = warnings.len(), "parsed query");
    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "diameter" | "d" => {
            let v = parse_f64_in("diameter", value, DIAMETER_MM_RANGE, warnings);
            set_or_warn(&mut inst.diameter_mm, v, key, value, warnings);
        }
        "scale" => {
            let v = parse_f64_in("scale", value, SCALE_RANGE, warnings);
            set_or_warn(&mut inst.scale, v, key, value, warnings);
        }
        "x" | "offset_x" => {
            let v = parse_i32_in("offset_x", value, OFFSET_RANGE, warnings);
            set_or_warn(&mut inst.offset_x, v, key, value, warnings);
        }
        "y" | "offset_y" => {
            let v = parse_i32_in("offset_y", value, OFFSET_RANGE, warnings);
            set_or_warn(&mut inst.offset_y, v, key, value, warnings);
        }
        "rotate" | "rotation" => {
            let v = parse_f64_in("rotation", value, ROTATION_RANGE, warnings);
            set_or_warn(&mut inst.rotation_degrees, v, key, value, warnings);
        }
        "dpi" => {
            let v = parse_i32_in("dpi", value, DPI_RANGE, warnings);
            set_or_warn(&mut inst.dpi, v, key, value, warnings);
        }
        "layout" => {
            if let Some(kind) = parse_layout(value) {
                set_or_warn(&mut inst.layout, Some(kind), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "layout",
                    value: String::from(value),
                    reason: "expected grid|hex|compact",
                });
            }
        }
        "spacing" => {
            let v = parse_f64_in("spacing", value, SPACING_MM_RANGE, warnings);
            set_or_warn(&mut inst.spacing_mm, v, key, value, warnings);
        }
        "margin" => {
            let v = parse_f64_in("margin", value, MARGIN_MM_RANGE, warnings);
            set_or_warn(&mut inst.margin_mm, v, key, value, warnings);
        }
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

// ---- Value parsers ----

fn parse_f64_in(
    key: &'static str,
    s: &str,
    range: RangeInclusive<f64>,
    warnings: &mut Vec<ParseWarning>,
) -> Option<f64> {
    let Some(v) = s.trim().parse::<f64>().ok().filter(|v| v.is_finite()) else {
        warnings.push(ParseWarning::ValueInvalid {
            key,
            value: String::from(s),
            reason: "expected a number",
        });
        return None;
    };
    let (min, max) = range.into_inner();
    if v < min || v > max {
        warnings.push(ParseWarning::ValueOutOfRange {
            key,
            value: String::from(s),
            min,
            max,
        });
    }
    Some(v.clamp(min, max))
}

fn parse_i32_in(
    key: &'static str,
    s: &str,
    range: RangeInclusive<i32>,
    warnings: &mut Vec<ParseWarning>,
) -> Option<i32> {
    let Ok(v) = s.trim().parse::<i64>() else {
        warnings.push(ParseWarning::ValueInvalid {
            key,
            value: String::from(s),
            reason: "expected an integer",
        });
        return None;
    };
    let (min, max) = range.into_inner();
    if v < min as i64 || v > max as i64 {
        warnings.push(ParseWarning::ValueOutOfRange {
            key,
            value: String::from(s),
            min: min as f64,
            max: max as f64,
        });
    }
    Some(v.clamp(min as i64, max as i64) as i32)
}

fn parse_layout(s: &str) -> Option<LayoutKind> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("grid") {
        Some(LayoutKind::Grid)
    } else if s.eq_ignore_ascii_case("hex") || s.eq_ignore_ascii_case("compact") {
        Some(LayoutKind::Hex)
    } else {
        None
    }
}

// ---- Tokenizer ----

fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Decode `+` and `%XX` escapes. Malformed escapes pass through and invalid
/// UTF-8 is replaced.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(q: &str) -> (Instructions, Vec<ParseWarning>) {
        parse_query(q)
    }

    #[test]
    fn parse_crop_keys() {
        let (inst, w) = parse("diameter=40&scale=1.5&x=-20&y=35&rotation=45");
        assert!(w.is_empty(), "{w:?}");
        assert_eq!(inst.diameter_mm, Some(40.0));
        assert_eq!(inst.scale, Some(1.5));
        assert_eq!(inst.offset_x, Some(-20));
        assert_eq!(inst.offset_y, Some(35));
        assert_eq!(inst.rotation_degrees, Some(45.0));
    }

    #[test]
    fn parse_aliases() {
        let (a, _) = parse("d=32&offset_x=3&offset_y=4&rotate=90");
        let (b, _) = parse("diameter=32&x=3&y=4&rotation=90");
        assert_eq!(a, b);
    }

    #[test]
    fn keys_are_case_insensitive() {
        let (inst, w) = parse("DPI=150&Layout=HEX");
        assert!(w.is_empty(), "{w:?}");
        assert_eq!(inst.dpi, Some(150));
        assert_eq!(inst.layout, Some(LayoutKind::Hex));
    }

    #[test]
    fn layout_values() {
        assert_eq!(parse("layout=grid").0.layout, Some(LayoutKind::Grid));
        assert_eq!(parse("layout=hex").0.layout, Some(LayoutKind::Hex));
        assert_eq!(parse("layout=compact").0.layout, Some(LayoutKind::Hex));
        let (inst, w) = parse("layout=spiral");
        assert_eq!(inst.layout, None);
        assert!(matches!(
            w.as_slice(),
            [ParseWarning::ValueInvalid { key: "layout", .. }]
        ));
    }

    #[test]
    fn out_of_range_clamps_and_warns() {
        let (inst, w) = parse("d=5&scale=9&x=-5000&rotate=400&dpi=30&spacing=25&margin=-1");
        assert_eq!(inst.diameter_mm, Some(10.0));
        assert_eq!(inst.scale, Some(5.0));
        assert_eq!(inst.offset_x, Some(-1000));
        assert_eq!(inst.rotation_degrees, Some(360.0));
        assert_eq!(inst.dpi, Some(72));
        assert_eq!(inst.spacing_mm, Some(20.0));
        assert_eq!(inst.margin_mm, Some(0.0));
        assert_eq!(w.len(), 7, "{w:?}");
        assert_eq!(
            w[0],
            ParseWarning::ValueOutOfRange {
                key: "diameter",
                value: String::from("5"),
                min: 10.0,
                max: 200.0,
            }
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let (inst, w) = parse("d=200&scale=0.1&y=1000&rotate=0&dpi=600&spacing=0&margin=50");
        assert!(w.is_empty(), "{w:?}");
        assert_eq!(inst.dpi, Some(600));
    }

    #[test]
    fn invalid_values_warn_and_stay_unset() {
        let (inst, w) = parse("d=big&dpi=3.5&scale=nan&x=");
        assert_eq!(inst, Instructions::new());
        assert_eq!(w.len(), 4, "{w:?}");
        assert!(
            w.iter()
                .all(|w| matches!(w, ParseWarning::ValueInvalid { .. }))
        );
    }

    #[test]
    fn duplicate_key_warns_last_wins() {
        let (inst, w) = parse("d=40&diameter=50");
        assert_eq!(inst.diameter_mm, Some(50.0));
        assert_eq!(
            w,
            vec![ParseWarning::DuplicateKey {
                key: String::from("diameter"),
                value: String::from("50"),
            }]
        );
    }

    #[test]
    fn unknown_key_warns() {
        let (_, w) = parse("w=800&diameter=58");
        assert_eq!(
            w,
            vec![ParseWarning::KeyNotRecognized {
                key: String::from("w"),
                value: String::from("800"),
            }]
        );
    }

    #[test]
    fn percent_decoding_works() {
        let (inst, w) = parse("d=5%38&layout=%48ex&%64pi=+200");
        assert!(w.is_empty(), "{w:?}");
        assert_eq!(inst.diameter_mm, Some(58.0));
        assert_eq!(inst.layout, Some(LayoutKind::Hex));
        assert_eq!(inst.dpi, Some(200));
    }

    #[test]
    fn percent_decode_edge_cases() {
        assert_eq!(percent_decode("a%2"), "a%2");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%41"), "A");
        assert_eq!(percent_decode("%C3%A9"), "é");
        assert_eq!(percent_decode("%FF"), "\u{FFFD}");
    }

    #[test]
    fn leading_question_mark_and_empty_pairs() {
        let (inst, w) = parse("?&&dpi=150&");
        assert!(w.is_empty(), "{w:?}");
        assert_eq!(inst.dpi, Some(150));
    }
}
