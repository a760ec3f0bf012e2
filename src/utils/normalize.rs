//! Normalization of raw input values before they are bound into statements.

use std::str::FromStr;
use std::sync::OnceLock;

use bigdecimal::BigDecimal;
use jiff::Zoned;
use jiff::civil::{self, DateTime};
use jiff::fmt::strtime;
use regex::Regex;

use crate::error::InputError;

/// Day/month/two-digit-year layout accepted for reservation dates.
pub const RESERVATION_DATE_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Optional sign, an integer part that is either plain digits or
/// dot-grouped thousands, then an optional comma fraction.
static TOTAL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn total_pattern() -> &'static Regex {
    TOTAL_PATTERN.get_or_init(|| {
        Regex::new(r"^([+-]?)([0-9]+|[0-9]{1,3}(?:\.[0-9]{3})+)(?:,([0-9]+))?$").unwrap()
    })
}

/// Parses a reservation date such as `21/03/24 14:30:00,123`.
///
/// Everything after the first comma is a sub-second fraction and is dropped
/// without rounding. The two-digit year always lands in the current century,
/// so `70` is read as 2070 while this runs in the 2000s.
pub fn parse_reservation_date(field: &'static str, raw: &str) -> Result<DateTime, InputError> {
    let century = Zoned::now().year().div_euclid(100) * 100;
    parse_reservation_date_in_century(field, raw, century)
}

/// Same as [`parse_reservation_date`] with an explicit century, e.g. `2000`.
pub fn parse_reservation_date_in_century(
    field: &'static str,
    raw: &str,
    century: i16,
) -> Result<DateTime, InputError> {
    let invalid = |e: jiff::Error| InputError::new(field, raw, e.to_string());
    let whole_seconds = raw.split(',').next().unwrap_or(raw);

    let mut fields = strtime::parse(RESERVATION_DATE_FORMAT, whole_seconds).map_err(invalid)?;
    let year = fields
        .year()
        .ok_or_else(|| InputError::new(field, raw, "missing year"))?;
    fields
        .set_year(Some(century + year.rem_euclid(100)))
        .map_err(invalid)?;

    fields
        .to_datetime()
        .map(truncate_to_second)
        .map_err(invalid)
}

/// Drops the sub-second component of a datetime.
pub fn truncate_to_second(value: DateTime) -> DateTime {
    DateTime::from_parts(
        value.date(),
        civil::time(value.hour(), value.minute(), value.second(), 0),
    )
}

/// Parses a monetary total written with a comma as decimal separator.
///
/// Dots may only group thousands (`1.234,56` is `1234.56`). Anything else,
/// including `1,234.56` and exponents, is rejected.
pub fn parse_total(raw: &str) -> Result<BigDecimal, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::new("total", raw, "value is empty"));
    }

    let captures = total_pattern().captures(trimmed).ok_or_else(|| {
        InputError::new(
            "total",
            raw,
            "expected digits with optional '.' thousands groups and a ',' decimal part",
        )
    })?;

    let sign = captures.get(1).map_or("", |m| m.as_str());
    let integer = captures.get(2).map_or("", |m| m.as_str()).replace('.', "");
    let normalized = match captures.get(3) {
        Some(fraction) => format!("{}{}.{}", sign, integer, fraction.as_str()),
        None => format!("{}{}", sign, integer),
    };

    BigDecimal::from_str(&normalized).map_err(|e| InputError::new("total", raw, e.to_string()))
}

/// Maps an absent or empty optional text to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
