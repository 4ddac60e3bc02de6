//! Pull-based lexer for conditional-compilation expressions.
//!
//! [`PpLexer`] owns an immutable character buffer and a monotonically
//! advancing cursor. The parser requests one token at a time via
//! [`next_token`](PpLexer::next_token); the symbol table is threaded through
//! as mutable context so identifier tokens can carry their interned index.
//!
//! Lexical failures (unrecognized characters, malformed numeric literals) are
//! reported in-band as [`TokenID::Error`] tokens; the parser escalates them
//! to a fatal evaluation failure.

use crate::chars::{is_pp_alpha, is_pp_digit, is_pp_space};
use crate::number::parse_number;
use crate::symtab::SymTab;
use crate::token::{PpToken, TokenID, TokenValue};
use smartstring::alias::String;

/// The conditional-expression lexer.
///
/// Created once per evaluation over the full source text. The cursor only
/// ever advances, except for the single character of lookahead used to
/// decide two-character operators (`==`, `!=`, `||`, `&&`, `<=`, `>=`).
#[derive(Debug)]
pub struct PpLexer {
    chars: Vec<char>,
    pos: usize,
}

impl PpLexer {
    /// Creates a lexer over `source`.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Current cursor position, in characters from the start of the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Consumes one character and emits a bare token.
    #[inline]
    fn punct(&mut self, token_id: TokenID) -> PpToken {
        self.pos += 1;
        PpToken::bare(token_id)
    }

    /// Consumes one or two characters: `two` when the lookahead character is
    /// `next`, `one` otherwise.
    #[inline]
    fn punct2(&mut self, next: char, two: TokenID, one: TokenID) -> PpToken {
        if self.peek_next() == Some(next) {
            self.pos += 2;
            PpToken::bare(two)
        } else {
            self.pos += 1;
            PpToken::bare(one)
        }
    }

    /// Returns the next token, interning identifiers into `symtab`.
    ///
    /// Emits [`TokenID::End`] at end of input (and on every call after
    /// that), never an error. Unrecognized input yields [`TokenID::Error`].
    pub fn next_token(&mut self, symtab: &mut SymTab) -> PpToken {
        let token = self.scan(symtab);
        log::trace!("token {:?} at {}", token, self.pos);
        token
    }

    fn scan(&mut self, symtab: &mut SymTab) -> PpToken {
        while matches!(self.peek(), Some(c) if is_pp_space(c)) {
            self.pos += 1;
        }
        let Some(ch) = self.peek() else {
            return PpToken::bare(TokenID::End);
        };

        match ch {
            '(' => return self.punct(TokenID::LeftParen),
            ')' => return self.punct(TokenID::RightParen),
            ',' => return self.punct(TokenID::Comma),
            '=' => return self.punct2('=', TokenID::EqualEqual, TokenID::Equal),
            '!' => return self.punct2('=', TokenID::NotEqual, TokenID::Exclamation),
            '|' => return self.punct2('|', TokenID::LogicalOr, TokenID::VertLine),
            '&' => return self.punct2('&', TokenID::LogicalAnd, TokenID::Ampersand),
            '^' => return self.punct(TokenID::Chevron),
            '+' => return self.punct(TokenID::Plus),
            '-' => return self.punct(TokenID::Minus),
            '*' => return self.punct(TokenID::Asterisk),
            '/' => return self.punct(TokenID::Slash),
            '%' => return self.punct(TokenID::Percent),
            '<' => return self.punct2('=', TokenID::LtOrEqual, TokenID::Lt),
            '>' => return self.punct2('=', TokenID::GtOrEqual, TokenID::Gt),
            _ => {}
        }

        if is_pp_digit(ch) {
            return match parse_number(&self.chars, &mut self.pos) {
                Ok(n) => PpToken {
                    token_id: TokenID::Number,
                    value: TokenValue::Number(n.to_i32()),
                },
                Err(_) => PpToken::bare(TokenID::Error),
            };
        }

        if !is_pp_alpha(ch) && ch != '_' {
            return PpToken::bare(TokenID::Error);
        }

        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_pp_alpha(c) || is_pp_digit(c) || c == '_') {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos]
            .iter()
            .collect::<std::string::String>()
            .into();
        let index = symtab.intern(text);
        PpToken {
            token_id: TokenID::Ident,
            value: TokenValue::Ident(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn lex_all(source: &str) -> (Vec<PpToken>, SymTab) {
        let mut symtab = SymTab::new();
        let mut lexer = PpLexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token(&mut symtab);
            let done = tok.token_id == TokenID::End;
            tokens.push(tok);
            if done {
                break;
            }
        }
        (tokens, symtab)
    }

    fn ids(tokens: &[PpToken]) -> Vec<TokenID> {
        tokens.iter().map(|t| t.token_id).collect()
    }

    #[test]
    fn digits_lex_as_one_number_then_end() {
        init_logger();
        let (tokens, _) = lex_all("123456");
        assert_eq!(ids(&tokens), vec![TokenID::Number, TokenID::End]);
        assert!(matches!(tokens[0].value, TokenValue::Number(123456)));
    }

    #[test]
    fn end_is_sticky() {
        init_logger();
        let mut symtab = SymTab::new();
        let mut lexer = PpLexer::new("  ");
        assert_eq!(lexer.next_token(&mut symtab).token_id, TokenID::End);
        assert_eq!(lexer.next_token(&mut symtab).token_id, TokenID::End);
    }

    #[test]
    fn single_and_double_character_operators() {
        init_logger();
        let (tokens, _) = lex_all("= == ! != | || & && < <= > >=");
        assert_eq!(
            ids(&tokens),
            vec![
                TokenID::Equal,
                TokenID::EqualEqual,
                TokenID::Exclamation,
                TokenID::NotEqual,
                TokenID::VertLine,
                TokenID::LogicalOr,
                TokenID::Ampersand,
                TokenID::LogicalAnd,
                TokenID::Lt,
                TokenID::LtOrEqual,
                TokenID::Gt,
                TokenID::GtOrEqual,
                TokenID::End,
            ]
        );
    }

    #[test]
    fn adjacent_double_characters_need_no_space() {
        init_logger();
        // `<=` must win over `<` `=` on one character of lookahead.
        let (tokens, _) = lex_all("1<=2");
        assert_eq!(
            ids(&tokens),
            vec![
                TokenID::Number,
                TokenID::LtOrEqual,
                TokenID::Number,
                TokenID::End
            ]
        );
    }

    #[test]
    fn punctuation_and_arithmetic() {
        init_logger();
        let (tokens, _) = lex_all("(1 + 2) * 3 / 4 % 5 ^ 6, 7");
        assert_eq!(
            ids(&tokens),
            vec![
                TokenID::LeftParen,
                TokenID::Number,
                TokenID::Plus,
                TokenID::Number,
                TokenID::RightParen,
                TokenID::Asterisk,
                TokenID::Number,
                TokenID::Slash,
                TokenID::Number,
                TokenID::Percent,
                TokenID::Number,
                TokenID::Chevron,
                TokenID::Number,
                TokenID::Comma,
                TokenID::Number,
                TokenID::End,
            ]
        );
    }

    #[test]
    fn identifiers_are_interned_per_occurrence() {
        init_logger();
        let (tokens, symtab) = lex_all("FOO BAR FOO");
        assert!(matches!(tokens[0].value, TokenValue::Ident(0)));
        assert!(matches!(tokens[1].value, TokenValue::Ident(1)));
        assert!(matches!(tokens[2].value, TokenValue::Ident(2)));
        assert_eq!(symtab.resolve(0).unwrap(), "FOO");
        assert_eq!(symtab.resolve(2).unwrap(), "FOO");
    }

    #[test]
    fn unicode_identifier_with_digits_is_one_token() {
        init_logger();
        let (tokens, symtab) = lex_all("値123");
        assert_eq!(ids(&tokens), vec![TokenID::Ident, TokenID::End]);
        assert_eq!(symtab.resolve(0).unwrap(), "値123");
    }

    #[test]
    fn underscore_starts_an_identifier() {
        init_logger();
        let (tokens, symtab) = lex_all("_abc9");
        assert_eq!(ids(&tokens), vec![TokenID::Ident, TokenID::End]);
        assert_eq!(symtab.resolve(0).unwrap(), "_abc9");
    }

    #[test]
    fn number_adjacent_to_letters_splits() {
        init_logger();
        // The literal parser stops before `abc`; the rest lexes as an
        // identifier (the grammar will reject the sequence).
        let (tokens, symtab) = lex_all("123abc");
        assert_eq!(
            ids(&tokens),
            vec![TokenID::Number, TokenID::Ident, TokenID::End]
        );
        assert_eq!(symtab.resolve(0).unwrap(), "abc");
    }

    #[test]
    fn unrecognized_character_yields_error_token() {
        init_logger();
        let mut symtab = SymTab::new();
        let mut lexer = PpLexer::new("1 $ 2");
        assert_eq!(lexer.next_token(&mut symtab).token_id, TokenID::Number);
        assert_eq!(lexer.next_token(&mut symtab).token_id, TokenID::Error);
    }

    #[test]
    fn malformed_literal_yields_error_token() {
        init_logger();
        let mut symtab = SymTab::new();
        let mut lexer = PpLexer::new("0x");
        assert_eq!(lexer.next_token(&mut symtab).token_id, TokenID::Error);
    }

    #[test]
    fn hex_binary_and_real_literals() {
        init_logger();
        let (tokens, _) = lex_all("0xff 0b101 010 1.5");
        let values: Vec<i32> = tokens
            .iter()
            .filter_map(|t| match t.value {
                TokenValue::Number(v) => Some(v),
                _ => None,
            })
            .collect();
        assert_eq!(values, vec![255, 5, 10, 1]);
    }
}
