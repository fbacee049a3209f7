//! Column type inference from raw text cells
//!
//! Decides the narrowest element type that every cell in a column can be
//! read as: integer, then float, then text.

use crate::types::ElementType;

/// Check if a string is an integer literal (optional sign, ASCII digits)
pub fn is_integer(value: &str) -> bool {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) && trimmed.parse::<i64>().is_ok()
}

/// Check if a string is a floating-point literal
///
/// Accepts a leading sign, a decimal point and an exponent. Spellings
/// without any digit (`inf`, `NaN`, `.`) are rejected so that words never
/// read as numbers.
///
/// # Examples
/// - `"3.14e-2"` -> true
/// - `"-7"` -> true
/// - `"abc"` -> false
/// - `""` -> false
pub fn is_float(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }
    trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && trimmed.parse::<f64>().is_ok()
}

/// Parse the non-finite spellings a float column renders as text
///
/// Only explicit conversion accepts these; inference still reads them as
/// text. Case-insensitive `nan`, `inf` and `infinity`, with an optional sign.
pub fn parse_non_finite(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let (negative, word) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = match word.to_ascii_lowercase().as_str() {
        "nan" => f64::NAN,
        "inf" | "infinity" => f64::INFINITY,
        _ => return None,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Infer the element type of a column from its raw cells
///
/// Empty cells carry no evidence. A column is integer when every non-empty
/// cell is an integer literal and none are empty, float when every non-empty
/// cell is numeric and at least one is fractional or a cell is empty
/// (empty numeric cells become NaN), and text otherwise. A column with no
/// non-empty cells is text.
pub fn infer_column_dtype<S: AsRef<str>>(values: &[S]) -> ElementType {
    let mut saw_value = false;
    let mut saw_empty = false;
    let mut all_integer = true;

    for value in values {
        let cell = value.as_ref().trim();
        if cell.is_empty() {
            saw_empty = true;
            continue;
        }
        saw_value = true;
        if is_integer(cell) {
            continue;
        }
        if is_float(cell) {
            all_integer = false;
            continue;
        }
        return ElementType::Text;
    }

    if !saw_value {
        ElementType::Text
    } else if all_integer && !saw_empty {
        ElementType::Integer
    } else {
        ElementType::Float
    }
}
