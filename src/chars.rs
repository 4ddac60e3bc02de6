//! Character classification for conditional-compilation expressions.
//!
//! The host language lexes from wide characters, and the standard `is*`
//! classifiers are only meaningful for the 0–255 range. These predicates pin
//! the rule down exactly: codepoints above 255 are never whitespace and never
//! digits, but always count as alphabetic, so that non-Latin identifiers lex
//! as single tokens without a Unicode category table. Identifier lexing
//! depends on this exact split; do not substitute a stricter Unicode test.

/// True when `ch` is whitespace. Codepoints above 255 never are.
///
/// For the 0–255 range this matches the C-locale `isspace` set, including
/// vertical tab.
#[inline]
pub fn is_pp_space(ch: char) -> bool {
    if (ch as u32) > 0xff {
        false
    } else {
        matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
    }
}

/// True when `ch` is a decimal digit. Codepoints above 255 never are.
#[inline]
pub fn is_pp_digit(ch: char) -> bool {
    if (ch as u32) > 0xff {
        false
    } else {
        ch.is_ascii_digit()
    }
}

/// True when `ch` is alphabetic for identifier purposes.
///
/// Every codepoint above 255 qualifies unconditionally; within 0–255 only
/// ASCII letters do. Note the asymmetry: Latin-1 letters such as `é` (U+00E9)
/// are *not* identifier characters, while any higher-plane codepoint is.
#[inline]
pub fn is_pp_alpha(ch: char) -> bool {
    if (ch as u32) > 0xff {
        true
    } else {
        ch.is_ascii_alphabetic()
    }
}
