//! Digit rendering for a single stroke: reversal, zero suffix, doubling, and
//! the decimal point.

use crate::stroke::Stroke;

/// `0*Z` writes a thousands group rather than `000.`.
const ZERO_COMMA_STROKE: &str = "0*Z";
const ZERO_COMMA: &str = ",000";

/// Render the digit portion of `stroke`.
///
/// Digit-less strokes render as the empty string. When both `D` and `Z` are
/// present the zero suffix and doubling are skipped; the dollars-per-hundred
/// decorator handles that combination.
pub(crate) fn render(stroke: &Stroke<'_>) -> String {
    if stroke.raw() == ZERO_COMMA_STROKE {
        return ZERO_COMMA.to_string();
    }

    let mut out: String = if stroke.reversed() {
        stroke.digits().chars().rev().collect()
    } else {
        stroke.digits().to_string()
    };
    if out.is_empty() {
        return out;
    }

    let controls = stroke.controls();
    if !controls.contains_all(&['D', 'Z']) {
        if controls.contains('Z') {
            out.push_str("00");
        }
        if controls.contains('D') {
            if let Some(last) = out.chars().last() {
                out.push(last);
            }
        }
    }

    if controls.contains('*') && !controls.contains('R') && !controls.contains('S') {
        out.push('.');
    }

    out
}

/// Render the digit portion of a raw stroke string.
pub fn transform(stroke: &str) -> String {
    render(&Stroke::parse(stroke))
}
