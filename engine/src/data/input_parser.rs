// Turns lines typed at the console into validated values.
//
// Number syntax follows the interactive convention the programs were written
// for: surrounding whitespace is ignored, an explicit sign is allowed and
// single underscores may separate digits ("1_000_000").
use crate::error::EngineError;
use shared::models::ShiftKey;
use std::io::BufRead;

/// Reads one line without its terminator. Running out of input before any
/// character is read is `EndOfInput`; a final line with no newline is fine.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, EngineError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(EngineError::EndOfInput);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

pub fn parse_shift_key(s: &str) -> Result<ShiftKey, EngineError> {
    Ok(s.parse::<ShiftKey>()?)
}

pub fn parse_number(s: &str) -> Result<f64, EngineError> {
    let normalized = strip_digit_separators(s.trim())
        .ok_or_else(|| EngineError::InvalidNumber(s.to_string()))?;

    normalized.parse::<f64>().map_err(|e| {
        tracing::debug!(input = %s, error = %e, "Input is not a number");
        EngineError::InvalidNumber(s.to_string())
    })
}

// The count line is informational only; any whole number is accepted,
// including zero and negatives.
pub fn parse_year_count(s: &str) -> Result<i64, EngineError> {
    parse_whole_number(s).ok_or_else(|| EngineError::InvalidCount(s.to_string()))
}

pub fn parse_prices(s: &str) -> Result<Vec<i64>, EngineError> {
    s.split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            parse_whole_number(token).ok_or_else(|| {
                tracing::debug!(position = idx + 1, token, "Price is not a whole number");
                EngineError::InvalidPrices {
                    position: idx + 1,
                    token: token.to_string(),
                }
            })
        })
        .collect()
}

fn parse_whole_number(s: &str) -> Option<i64> {
    let normalized = strip_digit_separators(s.trim())?;
    // f64 syntax survives strip_digit_separators; i64::from_str rejects it.
    normalized.parse::<i64>().ok()
}

// Removes underscores that sit between two ASCII digits. Returns None when an
// underscore appears anywhere else, since that is never valid number syntax.
fn strip_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return Some(s.to_string());
    }

    let mut out = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c == '_' {
            let before = s[..i].chars().next_back();
            let after = s[i + 1..].chars().next();
            match (before, after) {
                (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(c);
    }
    Some(out)
}
