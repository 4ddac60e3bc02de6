//! # ppexpr
//!
//! A conditional-compilation expression evaluator for a script compiler:
//! given the text of an `@if`-style directive expression, it decides at
//! compile time what the guarded block evaluates to, yielding a 32-bit
//! signed integer (nonzero meaning "include") or a fatal failure that
//! invalidates the compilation unit.
//!
//! ## Overview
//!
//! The crate is a lexer–parser pipeline over a single in-memory expression:
//!
//! - [`chars`] — character classification with the host language's exact
//!   0–255 vs ≥256 split (non-Latin identifiers are admitted wholesale).
//! - [`token`] — token kinds and payloads ([`PpToken`], [`TokenID`],
//!   [`TokenValue`]).
//! - [`symtab`] — an append-only symbol table ([`SymTab`]) interning every
//!   identifier occurrence.
//! - [`number`] — the host-language numeric-literal grammar (decimal, hex,
//!   binary, octal, real), truncated to 32 bits.
//! - [`lexer`] — a pull-based lexer ([`PpLexer`]) the parser drains one
//!   token at a time.
//! - [`parser`] — a precedence-climbing parser ([`PpParser`]) that folds the
//!   expression into its value as it parses; identifiers resolve through the
//!   [`SymbolResolver`] seam. Note that `||` and `&&` do **not**
//!   short-circuit.
//! - [`eval`] — the evaluator driver ([`PpExprParser`]) owning the source
//!   and symbol table for exactly one parse, plus the one-shot [`evaluate`]
//!   / [`evaluate_with`] entry points.
//! - [`error`] — the unified fatal error type ([`PpError`]).
//!
//! ## Example
//!
//! ```rust
//! use ppexpr::{evaluate, evaluate_with};
//!
//! // Plain arithmetic with C-like precedence.
//! assert_eq!(evaluate("1 + 2 * 3"), Ok(7));
//!
//! // Preprocessor symbols come from the surrounding compiler; without a
//! // resolver every identifier is 0.
//! assert_eq!(evaluate("DEBUG == 0"), Ok(1));
//!
//! let mut resolver = |name: &str| -> i32 {
//!     match name {
//!         "DEBUG" => 1,
//!         "VERSION" => 310,
//!         _ => 0,
//!     }
//! };
//! assert_eq!(evaluate_with("DEBUG && VERSION >= 300", &mut resolver), Ok(1));
//!
//! // Malformed expressions are fatal, never a default value.
//! assert!(evaluate("1 / 0").is_err());
//! ```
//!
//! ## Re-exports
//!
//! The main entry points are re-exported at the crate root:
//!
//! ```text
//! evaluate, evaluate_with, PpExprParser, PpLexer, PpParser, SymbolResolver,
//! SymTab, SymTabError, PpError, PpToken, TokenID, TokenValue
//! ```

pub mod chars;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod number;
pub mod parser;
pub mod symtab;
pub mod token;

pub use error::PpError;
pub use eval::{evaluate, evaluate_with, PpExprParser};
pub use lexer::PpLexer;
pub use parser::{PpParser, SymbolResolver};
pub use symtab::{SymTab, SymTabError};
pub use token::{PpToken, TokenID, TokenValue};
