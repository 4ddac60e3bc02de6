//! # Preprocessor Tokens
//!
//! This module defines the token kind and token value used by the
//! conditional-expression parser. It provides:
//!
//! - [`TokenID`]: the token's kind (operators, literals, identifiers, and the
//!   end-of-input / lex-error markers),
//! - [`TokenValue`]: the payload carried by lexical tokens (a numeric value
//!   or a symbol-table index),
//! - [`PpToken`]: a concrete token pairing a [`TokenID`] with a
//!   [`TokenValue`].
//!
//! Tokens are produced one at a time by the lexer and consumed immediately by
//! the parser; they are never materialized into a sequence.

/// The kind of a lexical token.
///
/// One variant per punctuation mark and operator of the conditional
/// expression language, plus [`Number`](TokenID::Number),
/// [`Ident`](TokenID::Ident), the [`End`](TokenID::End) marker emitted at
/// end of input, and [`Error`](TokenID::Error) for unrecognized or malformed
/// input. An `Error` token is fatal for the whole evaluation; there is no
/// token-level recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenID {
    /// End of input. Emitted once the cursor reaches the terminator, and on
    /// every subsequent request.
    End,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `=` (recognized by the lexer; no grammar production uses it)
    Equal,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,
    /// `!`
    Exclamation,
    /// `|`
    VertLine,
    /// `||`
    LogicalOr,
    /// `&`
    Ampersand,
    /// `&&`
    LogicalAnd,
    /// `^`
    Chevron,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `<`
    Lt,
    /// `<=`
    LtOrEqual,
    /// `>`
    Gt,
    /// `>=`
    GtOrEqual,
    /// Numeric literal; carries [`TokenValue::Number`].
    Number,
    /// Identifier; carries [`TokenValue::Ident`].
    Ident,
    /// Unrecognized character or malformed numeric literal.
    Error,
}

/// The payload carried by a lexical token.
///
/// Punctuation and operators carry [`TokenValue::None`]; numeric literals and
/// identifiers carry their value or symbol-table index.
///
/// # Example
/// ```rust
/// # use ppexpr::TokenValue;
/// let tok = TokenValue::Number(42);
///
/// let TokenValue::Number(n) = tok else {
///     panic!("Expected a numeric token");
/// };
/// assert_eq!(n, 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum TokenValue {
    /// No associated data (for punctuation and operators).
    None,

    /// Identifier token with an index into the symbol table.
    Ident(usize),

    /// Numeric literal, already truncated to 32 bits.
    Number(i32),
}

/// A concrete lexical token for the conditional-expression frontend.
///
/// Groups a token kind ([`TokenID`]) with its optional payload
/// ([`TokenValue`]). Directive expressions are single lines, so tokens
/// carry no source positions.
///
/// # Example
/// ```rust
/// # use ppexpr::{PpToken, TokenID, TokenValue};
/// let tok = PpToken {
///     token_id: TokenID::Number,
///     value: TokenValue::Number(99),
/// };
///
/// assert_eq!(tok.token_id, TokenID::Number);
/// assert!(matches!(tok.value, TokenValue::Number(99)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PpToken {
    /// The token's kind or category (e.g. identifier, operator, number).
    pub token_id: TokenID,
    /// The associated value for the token, if applicable.
    pub value: TokenValue,
}

impl PpToken {
    /// A token with no payload, for punctuation and markers.
    #[inline]
    pub const fn bare(token_id: TokenID) -> Self {
        Self {
            token_id,
            value: TokenValue::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_value_number_extraction_with_let_else() {
        let tok = TokenValue::Number(42);

        let TokenValue::Number(n) = tok else {
            panic!("Expected a numeric token");
        };

        assert_eq!(n, 42);
    }

    #[test]
    fn token_value_ident_stores_symbol_index() {
        let idx = 7usize;
        let tok = TokenValue::Ident(idx);

        if let TokenValue::Ident(i) = tok {
            assert_eq!(i, idx);
        } else {
            panic!("Expected Ident token");
        }
    }

    #[test]
    fn bare_token_has_no_payload() {
        let t = PpToken::bare(TokenID::Plus);
        assert_eq!(t.token_id, TokenID::Plus);
        assert!(matches!(t.value, TokenValue::None));
    }

    #[test]
    fn token_is_copyable_and_debuggable() {
        let t1 = PpToken {
            token_id: TokenID::Number,
            value: TokenValue::Number(-1),
        };

        let t2 = t1;
        assert_eq!(t2.token_id, t1.token_id);

        let dbg_out = format!("{t1:?}");
        assert!(dbg_out.contains("PpToken"));
    }
}
