use crate::types::Scalar;

/// Separators used for thousands in the published figures.
const DIGIT_SEPARATORS: [char; 3] = [' ', '\u{a0}', '\u{202f}'];

/// Parse a count or amount into a nullable integer. Text loses its
/// thousands separators first; anything unparseable becomes `None`.
pub fn parse_integer(value: Option<&Scalar>) -> Option<i64> {
    match value? {
        Scalar::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Scalar::Text(s) => {
            let digits: String = s.chars().filter(|c| !DIGIT_SEPARATORS.contains(c)).collect();
            digits
                .parse()
                .ok()
                .or_else(|| digits.parse().ok().and_then(whole))
        }
        Scalar::Bool(_) | Scalar::Null => None,
    }
}

/// Whole-valued floats only, e.g. `12.0`.
fn whole(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}
