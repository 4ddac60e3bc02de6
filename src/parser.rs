//! # Conditional-Expression Parser
//!
//! A precedence-climbing parser that evaluates the expression while it
//! parses: each grammar level folds its operands into a 32-bit signed value
//! bottom-up, pulling tokens from the lexer one at a time. No syntax tree is
//! built and no token sequence is materialized.
//!
//! ## Grammar
//!
//! The precedence ladder, from loosest to tightest binding; every binary
//! operator is left-associative:
//!
//! ```text
//! expr        := logical_or
//! logical_or  := logical_and ( '||' logical_and )*
//! logical_and := bit_or ( '&&' bit_or )*
//! bit_or      := bit_xor ( '|' bit_xor )*
//! bit_xor     := bit_and ( '^' bit_and )*
//! bit_and     := equality ( '&' equality )*
//! equality    := relational ( ('=='|'!=') relational )*
//! relational  := additive ( ('<'|'<='|'>'|'>=') additive )*
//! additive    := multiplicative ( ('+'|'-') multiplicative )*
//! multiplicative := unary ( ('*'|'/'|'%') unary )*
//! unary       := ('!'|'-') unary | primary
//! primary     := NUMBER | IDENT | '(' expr ')'
//! ```
//!
//! ## Behavior highlights
//!
//! - **No short-circuit evaluation.** Both operands of `||` and `&&` are
//!   always parsed *and evaluated*, even when the left operand already
//!   determines the result. Host call sites that feed side-effecting symbol
//!   resolvers must not assume C semantics here.
//! - Arithmetic is 32-bit signed with wraparound on overflow; `/` and `%` by
//!   zero are fatal errors, and `i32::MIN / -1` wraps rather than trapping.
//! - Identifiers resolve through the caller-supplied [`SymbolResolver`];
//!   without one, every identifier evaluates to 0.

use crate::error::PpError;
use crate::lexer::PpLexer;
use crate::symtab::SymTab;
use crate::token::{PpToken, TokenID, TokenValue};

/// Resolves an identifier to its preprocessor value.
///
/// The surrounding compiler supplies this seam; the evaluator core only
/// interns identifier text and hands each occurrence to the resolver. Any
/// `FnMut(&str) -> i32` closure is a resolver:
///
/// ```rust
/// # use ppexpr::evaluate_with;
/// let mut resolver = |name: &str| -> i32 {
///     if name == "DEBUG" { 1 } else { 0 }
/// };
/// assert_eq!(evaluate_with("DEBUG && RELEASE == 0", &mut resolver), Ok(1));
/// ```
pub trait SymbolResolver {
    /// Returns the value of the symbol named `name`.
    fn resolve(&mut self, name: &str) -> i32;
}

impl<F> SymbolResolver for F
where
    F: FnMut(&str) -> i32,
{
    fn resolve(&mut self, name: &str) -> i32 {
        self(name)
    }
}

/// Binding power of a binary operator token, or `None` for tokens that are
/// not binary operators. Higher binds tighter.
fn binding_power(token_id: TokenID) -> Option<u8> {
    match token_id {
        TokenID::LogicalOr => Some(1),
        TokenID::LogicalAnd => Some(2),
        TokenID::VertLine => Some(3),
        TokenID::Chevron => Some(4),
        TokenID::Ampersand => Some(5),
        TokenID::EqualEqual | TokenID::NotEqual => Some(6),
        TokenID::Lt | TokenID::LtOrEqual | TokenID::Gt | TokenID::GtOrEqual => Some(7),
        TokenID::Plus | TokenID::Minus => Some(8),
        TokenID::Asterisk | TokenID::Slash | TokenID::Percent => Some(9),
        _ => None,
    }
}

/// The conditional-expression parser.
///
/// Holds exclusive mutable access to the lexer (tokens are pulled on demand,
/// the cursor only advances) and to the symbol table the lexer interns into.
/// One instance parses exactly one expression; [`parse`](PpParser::parse)
/// consumes it.
pub struct PpParser<'a> {
    lexer: &'a mut PpLexer,
    symtab: &'a mut SymTab,
    resolver: &'a mut dyn SymbolResolver,
    current: PpToken,
}

impl<'a> PpParser<'a> {
    /// Creates a parser over `lexer`, priming one token of lookahead.
    pub fn new(
        lexer: &'a mut PpLexer,
        symtab: &'a mut SymTab,
        resolver: &'a mut dyn SymbolResolver,
    ) -> Self {
        let current = lexer.next_token(symtab);
        Self {
            lexer,
            symtab,
            resolver,
            current,
        }
    }

    /// Parses one complete expression and returns its value.
    ///
    /// Fails on the first lex error, syntax error, or division by zero; any
    /// token after the complete expression is also an error.
    pub fn parse(mut self) -> Result<i32, PpError> {
        let value = self.parse_expr(0)?;
        match self.current.token_id {
            TokenID::End => Ok(value),
            TokenID::Error => Err(PpError::BadToken),
            found => Err(PpError::TrailingInput { found }),
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token(self.symtab);
    }

    /// Precedence climbing: folds every binary operator whose binding power
    /// is at least `min_bp`.
    fn parse_expr(&mut self, min_bp: u8) -> Result<i32, PpError> {
        let mut lhs = self.parse_unary()?;
        while let Some(bp) = binding_power(self.current.token_id) {
            if bp < min_bp {
                break;
            }
            let op = self.current.token_id;
            self.advance();
            // bp + 1 makes the operator left-associative; the right operand
            // is always fully evaluated before the operator applies.
            let rhs = self.parse_expr(bp + 1)?;
            lhs = apply(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<i32, PpError> {
        match self.current.token_id {
            TokenID::Exclamation => {
                self.advance();
                let value = self.parse_unary()?;
                Ok((value == 0) as i32)
            }
            TokenID::Minus => {
                self.advance();
                let value = self.parse_unary()?;
                Ok(value.wrapping_neg())
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<i32, PpError> {
        match self.current.token_id {
            TokenID::Number => {
                let TokenValue::Number(value) = self.current.value else {
                    unreachable!()
                };
                self.advance();
                Ok(value)
            }
            TokenID::Ident => {
                let TokenValue::Ident(index) = self.current.value else {
                    unreachable!()
                };
                let name = self.symtab.resolve(index)?;
                let value = self.resolver.resolve(name);
                self.advance();
                Ok(value)
            }
            TokenID::LeftParen => {
                self.advance();
                let value = self.parse_expr(0)?;
                match self.current.token_id {
                    TokenID::RightParen => {
                        self.advance();
                        Ok(value)
                    }
                    TokenID::Error => Err(PpError::BadToken),
                    found => Err(PpError::UnexpectedToken { found }),
                }
            }
            TokenID::Error => Err(PpError::BadToken),
            found => Err(PpError::UnexpectedToken { found }),
        }
    }
}

/// Applies a binary operator to fully evaluated operands.
fn apply(op: TokenID, lhs: i32, rhs: i32) -> Result<i32, PpError> {
    let value = match op {
        TokenID::LogicalOr => (lhs != 0 || rhs != 0) as i32,
        TokenID::LogicalAnd => (lhs != 0 && rhs != 0) as i32,
        TokenID::VertLine => lhs | rhs,
        TokenID::Chevron => lhs ^ rhs,
        TokenID::Ampersand => lhs & rhs,
        TokenID::EqualEqual => (lhs == rhs) as i32,
        TokenID::NotEqual => (lhs != rhs) as i32,
        TokenID::Lt => (lhs < rhs) as i32,
        TokenID::LtOrEqual => (lhs <= rhs) as i32,
        TokenID::Gt => (lhs > rhs) as i32,
        TokenID::GtOrEqual => (lhs >= rhs) as i32,
        TokenID::Plus => lhs.wrapping_add(rhs),
        TokenID::Minus => lhs.wrapping_sub(rhs),
        TokenID::Asterisk => lhs.wrapping_mul(rhs),
        TokenID::Slash => {
            if rhs == 0 {
                return Err(PpError::DivideByZero);
            }
            lhs.wrapping_div(rhs)
        }
        TokenID::Percent => {
            if rhs == 0 {
                return Err(PpError::DivideByZero);
            }
            lhs.wrapping_rem(rhs)
        }
        _ => unreachable!(),
    };
    log::trace!("{:?}: {} {} -> {}", op, lhs, rhs, value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn eval_with(source: &str, resolver: &mut dyn SymbolResolver) -> Result<i32, PpError> {
        let mut symtab = SymTab::new();
        let mut lexer = PpLexer::new(source);
        PpParser::new(&mut lexer, &mut symtab, resolver).parse()
    }

    fn eval(source: &str) -> i32 {
        let mut zero = |_: &str| -> i32 { 0 };
        match eval_with(source, &mut zero) {
            Ok(v) => v,
            Err(e) => panic!("{source:?} failed: {e}"),
        }
    }

    fn eval_err(source: &str) -> PpError {
        let mut zero = |_: &str| -> i32 { 0 };
        match eval_with(source, &mut zero) {
            Ok(v) => panic!("{source:?} unexpectedly evaluated to {v}"),
            Err(e) => e,
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        init_logger();
        assert_eq!(eval("1 + 2 * 3"), 7);
        assert_eq!(eval("(1 + 2) * 3"), 21);
    }

    #[test]
    fn full_precedence_ladder() {
        init_logger();
        assert_eq!(eval("1 | 2 ^ 3 & 2"), 1 | (2 ^ (3 & 2)));
        assert_eq!(eval("1 + 2 < 4 == 1"), 1);
        assert_eq!(eval("2 * 3 % 4"), 2);
        assert_eq!(eval("10 - 4 - 3"), 3);
        assert_eq!(eval("100 / 10 / 5"), 2);
        assert_eq!(eval("0 || 1 && 0"), 0);
        assert_eq!(eval("1 ^ 1 || 1"), 1);
    }

    #[test]
    fn relational_chain_is_left_associative() {
        init_logger();
        // (5 > 3) > 1 = 1 > 1 = 0
        assert_eq!(eval("5 > 3 > 1"), 0);
        assert_eq!(eval("1 == 1 == 1"), 1);
    }

    #[test]
    fn unary_operators() {
        init_logger();
        assert_eq!(eval("!0"), 1);
        assert_eq!(eval("!5"), 0);
        assert_eq!(eval("!!7"), 1);
        assert_eq!(eval("-3 + 5"), 2);
        assert_eq!(eval("--3"), 3);
        assert_eq!(eval("!-1"), 0);
        assert_eq!(eval("-!0"), -1);
    }

    #[test]
    fn unary_binds_tighter_than_binary() {
        init_logger();
        assert_eq!(eval("-2 * 3"), -6);
        assert_eq!(eval("!1 + 1"), 1);
    }

    #[test]
    fn logical_results_are_zero_or_one() {
        init_logger();
        assert_eq!(eval("7 || 0"), 1);
        assert_eq!(eval("7 && 3"), 1);
        assert_eq!(eval("0 || 0"), 0);
        assert_eq!(eval("-1 && -1"), 1);
    }

    #[test]
    fn logical_operators_do_not_short_circuit() {
        init_logger();
        let calls = std::cell::Cell::new(0);
        let mut counting = |_: &str| -> i32 {
            calls.set(calls.get() + 1);
            5
        };
        assert_eq!(eval_with("0 && COUNT", &mut counting), Ok(0));
        assert_eq!(calls.get(), 1, "right operand of && must still be resolved");

        calls.set(0);
        assert_eq!(eval_with("1 || COUNT", &mut counting), Ok(1));
        assert_eq!(calls.get(), 1, "right operand of || must still be resolved");
    }

    #[test]
    fn every_identifier_occurrence_is_resolved() {
        init_logger();
        let mut names = Vec::new();
        let mut recording = |name: &str| -> i32 {
            names.push(name.to_owned());
            1
        };
        assert_eq!(eval_with("A && A && B", &mut recording), Ok(1));
        assert_eq!(names, vec!["A", "A", "B"]);
    }

    #[test]
    fn arithmetic_wraps_on_overflow() {
        init_logger();
        assert_eq!(eval("2147483647 + 1"), i32::MIN);
        assert_eq!(eval("-2147483647 - 2"), i32::MAX);
        assert_eq!(eval("65536 * 65536"), 0);
        assert_eq!(eval("-(-2147483647 - 1)"), i32::MIN);
    }

    #[test]
    fn min_over_minus_one_wraps_instead_of_trapping() {
        init_logger();
        assert_eq!(eval("(-2147483647 - 1) / -1"), i32::MIN);
        assert_eq!(eval("(-2147483647 - 1) % -1"), 0);
    }

    #[test]
    fn division_semantics() {
        init_logger();
        assert_eq!(eval("7 / 2"), 3);
        assert_eq!(eval("-7 / 2"), -3);
        assert_eq!(eval("7 % 3"), 1);
        assert_eq!(eval("-7 % 3"), -1);
    }

    #[test]
    fn division_by_zero_is_fatal() {
        init_logger();
        assert!(matches!(eval_err("1 / 0"), PpError::DivideByZero));
        assert!(matches!(eval_err("1 % 0"), PpError::DivideByZero));
        assert!(matches!(eval_err("1 / (2 - 2)"), PpError::DivideByZero));
    }

    #[test]
    fn unrecognized_character_is_fatal() {
        init_logger();
        assert!(matches!(eval_err("1 $ 2"), PpError::BadToken));
        assert!(matches!(eval_err("#if"), PpError::BadToken));
    }

    #[test]
    fn malformed_literal_is_fatal() {
        init_logger();
        assert!(matches!(eval_err("0x + 1"), PpError::BadToken));
        assert!(matches!(eval_err("2 * 0b"), PpError::BadToken));
    }

    #[test]
    fn syntax_errors_are_fatal() {
        init_logger();
        assert!(matches!(
            eval_err("(1 + 2"),
            PpError::UnexpectedToken {
                found: TokenID::End
            }
        ));
        assert!(matches!(
            eval_err("1 + 2)"),
            PpError::TrailingInput {
                found: TokenID::RightParen
            }
        ));
        assert!(matches!(
            eval_err("1 2"),
            PpError::TrailingInput {
                found: TokenID::Number
            }
        ));
        assert!(matches!(
            eval_err("1 + * 2"),
            PpError::UnexpectedToken {
                found: TokenID::Asterisk
            }
        ));
        assert!(matches!(
            eval_err(""),
            PpError::UnexpectedToken {
                found: TokenID::End
            }
        ));
    }

    #[test]
    fn tokens_outside_the_grammar_are_rejected() {
        init_logger();
        // `,` and a single `=` are lexed but no production accepts them.
        assert!(matches!(
            eval_err("1, 2"),
            PpError::TrailingInput {
                found: TokenID::Comma
            }
        ));
        assert!(matches!(
            eval_err("1 = 2"),
            PpError::TrailingInput {
                found: TokenID::Equal
            }
        ));
    }

    #[test]
    fn identifiers_default_to_zero() {
        init_logger();
        assert_eq!(eval("UNDEFINED"), 0);
        assert_eq!(eval("UNDEFINED + 3"), 3);
    }

    #[test]
    fn resolver_sees_exact_identifier_text() {
        init_logger();
        let mut resolver = |name: &str| -> i32 {
            match name {
                "VERSION" => 300,
                "値" => 7,
                _ => 0,
            }
        };
        assert_eq!(eval_with("VERSION >= 300", &mut resolver), Ok(1));
        assert_eq!(eval_with("値 * 2", &mut resolver), Ok(14));
    }

    #[test]
    fn parenthesized_expressions_nest() {
        init_logger();
        assert_eq!(eval("((((5))))"), 5);
        assert_eq!(eval("2 * (3 + (4 - 1))"), 12);
    }
}
