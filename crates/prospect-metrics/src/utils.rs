//! Shared field-access helpers.
//!
//! Every read of a spreadsheet cell goes through [`as_text`] so the rest of
//! the crate can assume clean, trimmed text regardless of whether the cell was
//! missing, empty, numeric or boolean.

use crate::record::CellValue;

// =============================================================================
// Text Normalisation
// =============================================================================

/// Trimmed string form of a cell.
///
/// Missing cells, empty text, `0`, `NaN` and `false` are all falsy and come
/// back as an empty string. Never panics.
///
/// # Example
///
/// ```rust,ignore
/// use prospect_metrics::utils::as_text;
/// use prospect_metrics::CellValue;
///
/// assert_eq!(as_text(Some(&CellValue::from("  Acme  "))), "Acme");
/// assert_eq!(as_text(Some(&CellValue::Number(45000.0))), "45000");
/// assert_eq!(as_text(None), "");
/// ```
pub fn as_text(value: Option<&CellValue>) -> String {
    match value {
        None | Some(CellValue::Empty) => String::new(),
        Some(CellValue::Text(s)) => s.trim().to_string(),
        Some(CellValue::Number(n)) => format_number(*n),
        Some(CellValue::Bool(true)) => "true".to_string(),
        Some(CellValue::Bool(false)) => String::new(),
    }
}

/// [`as_text`] followed by a case fold. Used for all free-text matching.
pub fn as_lower_text(value: Option<&CellValue>) -> String {
    as_text(value).to_lowercase()
}

/// Render a numeric cell the way a spreadsheet export prints it.
///
/// Integral values lose their fractional part (`45000.0` -> `"45000"`),
/// other values use the shortest round-trip form. Zero and NaN are falsy.
pub fn format_number(n: f64) -> String {
    if n == 0.0 || n.is_nan() {
        return String::new();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Take at most `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Read the run of ASCII digits at the start of `s` (after trimming).
///
/// `"2025 14:30"` -> `Some(2025)`, `"abc"` -> `None`.
pub fn leading_integer(s: &str) -> Option<i32> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i32>().ok()
}
