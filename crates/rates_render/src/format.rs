use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub const EM_DASH: &str = "—";

const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';

/// Formats a price the way the Russian locale does: digit groups separated
/// by a no-break space, a decimal comma and at most two fraction digits.
/// Missing and non-finite values become an em dash.
pub fn fmt_number(x: Option<f64>) -> String {
    let value = match x {
        Some(v) if v.is_finite() => v,
        _ => return EM_DASH.to_string(),
    };

    let (int_digits, frac_digits) = round_hundredths(&format!("{}", value.abs()));

    let mut out = String::new();
    if value < 0.0 && (int_digits != "0" || !frac_digits.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(&int_digits));

    if !frac_digits.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(&frac_digits);
    }
    out
}

/// Rounds a plain decimal string (`"1.005"`) to hundredths, half away from
/// zero, on its digits. Returns the integer digits and the fraction digits
/// without trailing zeros.
fn round_hundredths(decimal: &str) -> (String, String) {
    let (int_part, frac_part) = decimal.split_once('.').unwrap_or((decimal, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - 2;
    let int_digits: String = digits[..split].iter().map(|d| *d as char).collect();
    let frac_digits: String = digits[split..].iter().map(|d| *d as char).collect();
    (int_digits, frac_digits.trim_end_matches('0').to_string())
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Escapes the five markup-significant characters. `None` is treated as an
/// empty string.
pub fn escape_html<'a>(s: impl Into<Option<&'a str>>) -> String {
    let s = s.into().unwrap_or_default();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Local date and time in Russian notation, e.g. `19.10.2026, 14:03:05`.
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%d.%m.%Y, %H:%M:%S").to_string()
}
