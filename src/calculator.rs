//! Summation of comma-separated numeric operands.
//!
//! The input is split on every `,` and each segment is trimmed. Empty segments
//! (stray, leading, trailing or doubled commas) are skipped. Every remaining
//! token must be a finite decimal numeral; all offending tokens are collected
//! so the caller can report them in one round trip.
//!
//! This module is pure: no I/O, no logging, no shared state.

/// Failure outcome of [`sum`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    /// No input value was supplied at all.
    #[error("Input is missing")]
    MissingInput,

    /// One or more tokens are not finite numerals, in input order.
    #[error("Invalid characters: {}", .0.join(", "))]
    InvalidTokens(Vec<String>),
}

/// Sums a comma-separated list of numerals.
///
/// Returns `0` for empty or whitespace-only input. Any invalid token voids the
/// whole result. Tokens that denote an infinite value (`Infinity`, `1e400`)
/// are reported as `Infinity` or `-Infinity`.
pub fn sum(input: Option<&str>) -> Result<f64, CalculatorError> {
    let input = input.ok_or(CalculatorError::MissingInput)?;
    if trim_token(input).is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    let mut invalid = Vec::new();

    for token in input.split(',').map(trim_token).filter(|t| !t.is_empty()) {
        match parse_numeral(token) {
            Some(value) if value.is_finite() => total += value,
            Some(value) if value.is_sign_negative() => invalid.push("-Infinity".to_string()),
            Some(_) => invalid.push("Infinity".to_string()),
            None => invalid.push(token.to_string()),
        }
    }

    if invalid.is_empty() {
        Ok(total)
    } else {
        Err(CalculatorError::InvalidTokens(invalid))
    }
}

/// Trims Unicode whitespace and the byte-order mark (U+FEFF) from both ends.
fn trim_token(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Parses a single trimmed token, returning `None` if it is not a numeral.
fn parse_numeral(token: &str) -> Option<f64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);

    if unsigned == "Infinity" {
        return Some(if token.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64::from_str also accepts "inf" and "nan", which are not numerals here
    if !is_decimal_literal(unsigned) {
        return None;
    }

    token.parse().ok()
}

/// Matches `digits [. digits] [e [sign] digits]` or `. digits [exponent]`,
/// ASCII digits only.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();

    let int_digits = count_digits(bytes);
    let mut pos = int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
