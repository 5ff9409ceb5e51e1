//! Lenient numeric parsing for spreadsheet cells.

/// Parses the longest numeric prefix of `value`, like a spreadsheet's
/// `parseFloat`.
///
/// Leading whitespace is skipped, an optional sign, digits with at most one
/// decimal point and an optional exponent are accepted. `"7.5/10"` parses as
/// `7.5`; `"n/a"` and `""` give `None`.
pub fn parse_leading_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        return trimmed[..end + "Infinity".len()]
            .replace("Infinity", "inf")
            .parse()
            .ok();
    }
    let mut seen_dot = false;
    let mut mantissa_digits = 0usize;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => mantissa_digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if mantissa_digits == 0 {
        return None;
    }
    // Exponent only counts when followed by at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut probe = end + 1;
        if matches!(bytes.get(probe), Some(b'+' | b'-')) {
            probe += 1;
        }
        let exp_start = probe;
        while matches!(bytes.get(probe), Some(b'0'..=b'9')) {
            probe += 1;
        }
        if probe > exp_start {
            end = probe;
        }
    }
    trimmed[..end].parse::<f64>().ok()
}

/// Parses `value` leniently, substituting 0 for anything unparsable.
pub fn lenient_f64(value: &str) -> f64 {
    parse_leading_f64(value).unwrap_or(0.0)
}

/// Formats a number the way a spreadsheet displays it: integral values
/// without a decimal part.
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
