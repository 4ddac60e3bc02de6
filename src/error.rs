//! # Evaluation Error Type
//!
//! This module defines [`PpError`], the unified error enum for the
//! conditional-expression pipeline. It covers the whole failure taxonomy:
//!
//! - **Lex errors** (unrecognized characters, malformed numeric literals),
//! - **Syntax errors** (unexpected tokens, unbalanced parentheses, trailing
//!   input after a complete expression),
//! - **Semantic errors** (division or modulo by zero),
//! - **Driver misuse** (a second parse on a consumed evaluator).
//!
//! Every variant is fatal: a malformed conditional-compilation expression
//! invalidates the whole compilation unit, so no error is recovered locally
//! and no partial result is ever produced. Conversions from underlying error
//! types are derived with `#[from]`, enabling propagation via `?`.

use crate::symtab::SymTabError;
use crate::token::TokenID;
use thiserror::Error;

/// Represents all possible failures of a conditional-expression evaluation.
///
/// # Examples
/// Division by zero surfaces as a fatal error, not a default value:
/// ```rust
/// # use ppexpr::{evaluate, PpError};
/// let err = evaluate("1 / 0").unwrap_err();
/// assert!(matches!(err, PpError::DivideByZero));
/// ```
///
/// Wrapping a symbol-table error:
/// ```rust
/// # use ppexpr::{PpError, SymTabError};
/// let underlying = SymTabError::InvalidIndex { index: 10, len: 3 };
/// let err: PpError = underlying.into();
/// assert!(matches!(err, PpError::SymTab(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PpError {
    /// The lexer produced an error token: an unrecognized character or a
    /// malformed numeric literal.
    #[error("invalid token in conditional expression")]
    BadToken,

    /// The parser met a token no grammar rule accepts at this point,
    /// including a missing `)`.
    #[error("unexpected {found:?} in conditional expression")]
    UnexpectedToken {
        /// The kind of token found.
        found: TokenID,
    },

    /// A complete expression was followed by further tokens.
    #[error("extra {found:?} after conditional expression")]
    TrailingInput {
        /// The kind of the first extra token.
        found: TokenID,
    },

    /// Division or modulo by zero, detected during evaluation.
    #[error("division by zero in conditional expression")]
    DivideByZero,

    /// `parse()` was called a second time on the same evaluator instance.
    #[error("conditional expression evaluator already consumed")]
    AlreadyParsed,

    /// A symbol-table operation failed.
    ///
    /// Wraps a [`SymTabError`]; unreachable in a correct pipeline, but
    /// propagated rather than unwrapped.
    #[error("symtab error {0:?}")]
    SymTab(#[from] SymTabError),
}
