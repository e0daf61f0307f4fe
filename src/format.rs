//! Number and date display formatting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Output of [`format_date`] for input that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%B %d, %Y"];

/// Insert `,` every three digits from the right: `1234567` → `1,234,567`.
pub fn format_number(n: i64) -> String {
    format_decimal(&n.to_string())
}

/// Largest integer a JS number holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Format a value handed over from page scripts, either as its string form
/// or as a JS number. Non-finite numbers render as JS prints them.
pub fn format_js_number(text: Option<&str>, number: Option<f64>) -> String {
    if let Some(text) = text {
        return format_decimal(text);
    }
    let Some(n) = number else {
        return String::new();
    };
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        let n = n as i64;
        return format_number(n);
    }
    format_decimal(&n.to_string())
}

/// Group the integer part of a decimal string, keeping sign and fraction.
///
/// Anything that is not a plain decimal number is returned unchanged.
pub fn format_decimal(raw: &str) -> String {
    let (sign, unsigned) = match raw.as_bytes().first() {
        Some(b'-' | b'+') => raw.split_at(1),
        _ => ("", raw),
    };
    let (int_part, frac) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };
    if int_part.is_empty() || !all_digits(int_part) || frac.is_some_and(|f| !all_digits(f)) {
        return raw.to_owned();
    }

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Render a date-like string as `Mon D, YYYY`, or [`INVALID_DATE`].
///
/// Timestamps keep the calendar date as written; no timezone shift is applied.
pub fn format_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| INVALID_DATE.to_owned(), |date| date.format("%b %-d, %Y").to_string())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    None
}
