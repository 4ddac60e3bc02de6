//! Numeric-literal parsing for conditional expressions.
//!
//! The conditional evaluator delegates numbers to the host language's literal
//! grammar; this module implements that contract: parse the leading numeric
//! prefix at the cursor, leave the cursor just past it, and signal malformed
//! input distinctly. Accepted forms are decimal integers, `0x`/`0X`
//! hexadecimal, `0b`/`0B` binary, and reals with a fraction and/or decimal
//! exponent; a run of plain digits is always decimal, leading zeros
//! included. The evaluator truncates whatever comes back to a 32-bit signed
//! integer via [`ParsedNumber::to_i32`].

use thiserror::Error;

/// Error signaled when the cursor does not start a well-formed literal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    /// The characters at the cursor do not form a valid numeric literal
    /// (e.g. a bare `0x` or `0b` prefix with no digits after it).
    #[error("malformed numeric literal")]
    Malformed,
}

/// A successfully parsed literal, before truncation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// Integer forms; wraps on overflow during accumulation.
    Int(i64),
    /// Real forms (fraction or exponent present).
    Real(f64),
}

impl ParsedNumber {
    /// Truncates the value to a 32-bit signed integer.
    ///
    /// Reals convert toward zero through `i64` first (the host engine's
    /// double-to-integer conversion) and then wrap to 32 bits; integers
    /// wrap directly.
    #[inline]
    pub fn to_i32(self) -> i32 {
        match self {
            ParsedNumber::Int(v) => v as i32,
            ParsedNumber::Real(r) => r as i64 as i32,
        }
    }
}

/// Parses the numeric literal starting at `chars[*pos]`.
///
/// On success the cursor is left just past the literal. On failure the
/// cursor position is unspecified — a malformed literal is fatal for the
/// whole evaluation, so nothing resumes from it.
///
/// # Examples
/// ```rust
/// # use ppexpr::number::{parse_number, ParsedNumber};
/// let chars: Vec<char> = "0x10)".chars().collect();
/// let mut pos = 0;
/// assert_eq!(parse_number(&chars, &mut pos), Ok(ParsedNumber::Int(16)));
/// assert_eq!(chars[pos], ')');
/// ```
pub fn parse_number(chars: &[char], pos: &mut usize) -> Result<ParsedNumber, NumberError> {
    let start = *pos;
    let first = match chars.get(*pos) {
        Some(c) if c.is_ascii_digit() => *c,
        _ => return Err(NumberError::Malformed),
    };

    if first == '0' {
        match chars.get(*pos + 1) {
            Some('x') | Some('X') => {
                *pos += 2;
                return scan_int(chars, pos, 16);
            }
            Some('b') | Some('B') => {
                *pos += 2;
                return scan_int(chars, pos, 2);
            }
            _ => {}
        }
    }

    while matches!(chars.get(*pos), Some(c) if c.is_ascii_digit()) {
        *pos += 1;
    }
    let int_end = *pos;

    let mut is_real = false;
    // A fraction only counts when a digit follows the dot; a trailing dot is
    // left for the lexer to reject as an unrecognized character.
    if matches!(chars.get(*pos), Some('.'))
        && matches!(chars.get(*pos + 1), Some(c) if c.is_ascii_digit())
    {
        is_real = true;
        *pos += 1;
        while matches!(chars.get(*pos), Some(c) if c.is_ascii_digit()) {
            *pos += 1;
        }
    }
    // Same for the exponent: `1e` alone is the integer 1 followed by an
    // identifier, not a malformed real.
    if matches!(chars.get(*pos), Some('e') | Some('E')) {
        let mut look = *pos + 1;
        if matches!(chars.get(look), Some('+') | Some('-')) {
            look += 1;
        }
        if matches!(chars.get(look), Some(c) if c.is_ascii_digit()) {
            is_real = true;
            *pos = look + 1;
            while matches!(chars.get(*pos), Some(c) if c.is_ascii_digit()) {
                *pos += 1;
            }
        }
    }

    if is_real {
        let text: std::string::String = chars[start..*pos].iter().collect();
        let value = text.parse::<f64>().map_err(|_| NumberError::Malformed)?;
        return Ok(ParsedNumber::Real(value));
    }

    fold_digits(&chars[start..int_end], 10)
        .map(ParsedNumber::Int)
        .ok_or(NumberError::Malformed)
}

/// Scans a run of digits in `radix`, requiring at least one.
fn scan_int(chars: &[char], pos: &mut usize, radix: u32) -> Result<ParsedNumber, NumberError> {
    let start = *pos;
    while matches!(chars.get(*pos), Some(c) if c.is_digit(radix)) {
        *pos += 1;
    }
    if *pos == start {
        return Err(NumberError::Malformed);
    }
    fold_digits(&chars[start..*pos], radix)
        .map(ParsedNumber::Int)
        .ok_or(NumberError::Malformed)
}

/// Accumulates `digits` in `radix` with wraparound, the way the host lexer
/// truncates oversized literals. Returns `None` on a digit outside the radix.
fn fold_digits(digits: &[char], radix: u32) -> Option<i64> {
    let mut acc: u64 = 0;
    for c in digits {
        let d = c.to_digit(radix)?;
        acc = acc.wrapping_mul(radix as u64).wrapping_add(d as u64);
    }
    Some(acc as i64)
}
