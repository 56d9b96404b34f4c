//! Display formatting for prices, quantities and timestamps.

use chrono::{DateTime, Utc};

/// Currency suffix appended to every price.
pub const CURRENCY: &str = "$MAGIC";

const MAX_FRACTION_DIGITS: usize = 3;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// Format a decimal-as-text price, e.g. `"1234.5"` → `"1,234.5 $MAGIC"`.
///
/// At most three fraction digits are kept and trailing zeros are dropped, so
/// `"100"` and `"100.000"` format identically. Text that is not a finite
/// number is shown as-is.
pub fn format_price(price: &str) -> String {
    let trimmed = price.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{} {CURRENCY}", format_decimal(value)),
        _ => format!("{trimmed} {CURRENCY}"),
    }
}

/// Quantities are shown verbatim.
pub fn format_quantity(quantity: &i64) -> String {
    quantity.to_string()
}

/// Distance from `now` to `at_millis` in its largest whole unit:
/// `"in 3 days"`, `"5 hours ago"`, or `"now"` under a second.
pub fn format_relative(at_millis: i64, now: DateTime<Utc>) -> String {
    let delta = at_millis.saturating_sub(now.timestamp_millis());
    let seconds = delta.unsigned_abs() / 1000;

    if seconds == 0 {
        return "now".to_string();
    }

    let (size, unit) = [
        (YEAR, "year"),
        (MONTH, "month"),
        (DAY, "day"),
        (HOUR, "hour"),
        (MINUTE, "minute"),
    ]
    .into_iter()
    .find(|(size, _)| seconds >= *size)
    .unwrap_or((1, "second"));

    let count = seconds / size;
    let plural = if count == 1 { "" } else { "s" };

    if delta > 0 {
        format!("in {count} {unit}{plural}")
    } else {
        format!("{count} {unit}{plural} ago")
    }
}

/// Footer date, e.g. `"Oct 17, 2026"`.
pub fn format_date(now: DateTime<Utc>) -> String {
    now.format("%b %-d, %Y").to_string()
}

fn format_decimal(value: f64) -> String {
    let mut rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    if rounded.contains('.') {
        let keep = rounded.trim_end_matches('0').trim_end_matches('.').len();
        rounded.truncate(keep);
    }

    let (sign, unsigned) = match rounded.strip_prefix('-') {
        // -0.0001 rounds to "-0"
        Some("0") => ("", "0"),
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(rounded.len() + whole.len() / 3);
    out.push_str(sign);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
