//! Date normalisation for spreadsheet cells.
//!
//! Prospecting sheets mix three encodings in the same column: numeric day
//! serials (when the export tool serialises dates), Brazilian `DD/MM/YYYY`
//! text, and whatever free-form date string someone typed. [`parse_date`]
//! resolves all three to a calendar date; time of day is never meaningful
//! here and is dropped.

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime};

use crate::error::{DashboardError, Result};
use crate::record::CellValue;
use crate::utils::{as_text, leading_integer};

/// Numeric cells above this value are read as spreadsheet day serials.
/// 40000 is mid-2009; smaller numbers are counters, not dates.
pub const SERIAL_DATE_THRESHOLD: f64 = 40000.0;

/// Free-form layouts tried after the serial and `DD/MM/YYYY` rules.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 7] = [
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Day zero of the spreadsheet serial calendar (serial 25569 = 1970-01-01).
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN)
}

/// Parse a raw date string. Total: anything unrecognisable is `None`.
///
/// Resolution order, first match wins:
/// 1. empty / whitespace -> `None`
/// 2. a number greater than [`SERIAL_DATE_THRESHOLD`] -> day serial
/// 3. text with exactly two `/` separators -> day/month/year
/// 4. ISO, RFC 3339, RFC 2822 or English month-name layouts
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(n) = s.parse::<f64>() {
        if n.is_finite() && n > SERIAL_DATE_THRESHOLD {
            return from_serial(n);
        }
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            return parse_day_month_year(&parts);
        }
    }

    parse_free_form(s)
}

/// [`parse_date`] over a cell, normalising it first.
pub fn parse_cell_date(cell: Option<&CellValue>) -> Option<NaiveDate> {
    parse_date(&as_text(cell))
}

/// Convert a spreadsheet day serial to a date. Fractions (time of day) are
/// dropped.
pub fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    serial_epoch().checked_add_days(Days::new(serial.floor() as u64))
}

fn parse_day_month_year(parts: &[&str]) -> Option<NaiveDate> {
    let day = leading_integer(parts[0])?;
    let month = leading_integer(parts[1])?;
    let mut year = leading_integer(parts[2])?;
    if year < 100 {
        year += 2000;
    }
    if day < 1 || month < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn parse_free_form(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Render as zero-padded `DD/MM/YYYY`; empty for `None`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => String::new(),
    }
}

/// `DD/MM` bucket label used by the trend series.
pub fn day_month_label(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date supplied by a user (CLI flag, config file).
///
/// Unlike [`parse_date`] this reports failures instead of swallowing them.
pub fn parse_user_date(raw: &str) -> Result<NaiveDate> {
    parse_date(raw).ok_or_else(|| DashboardError::InvalidDate(raw.to_string()))
}
