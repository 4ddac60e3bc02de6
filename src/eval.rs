//! # Evaluator Driver
//!
//! [`PpExprParser`] owns the source buffer and the symbol table for exactly
//! one evaluation: create it over the expression text, call
//! [`parse`](PpExprParser::parse) (or
//! [`parse_with`](PpExprParser::parse_with) to supply a symbol resolver)
//! once, read the result, drop it. A second parse on the same instance is an
//! error.
//!
//! On failure the driver reports the diagnostic through the fatal sink —
//! one `log::error!` on the `ppexpr` target — and returns the error; no
//! partial result is ever exposed. The surrounding compiler is expected to
//! treat that as unrecoverable for the current compilation unit, the way a C
//! preprocessor treats a malformed `#if`.
//!
//! For the common one-shot case, use the free functions [`evaluate`] and
//! [`evaluate_with`].

use crate::error::PpError;
use crate::lexer::PpLexer;
use crate::parser::{PpParser, SymbolResolver};
use crate::symtab::{SymTab, SymTabError};

/// Evaluates a conditional-compilation expression with no symbol resolver;
/// every identifier evaluates to 0.
///
/// # Examples
/// ```rust
/// # use ppexpr::evaluate;
/// assert_eq!(evaluate("1 + 2 * 3"), Ok(7));
/// assert_eq!(evaluate("(1 + 2) * 3"), Ok(21));
/// assert_eq!(evaluate("UNDEFINED"), Ok(0));
/// assert!(evaluate("1 $ 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i32, PpError> {
    let mut zero = |_: &str| -> i32 { 0 };
    evaluate_with(source, &mut zero)
}

/// Evaluates a conditional-compilation expression, resolving identifiers
/// through `resolver`.
///
/// # Examples
/// ```rust
/// # use ppexpr::evaluate_with;
/// let mut resolver = |name: &str| -> i32 {
///     if name == "VERSION" { 300 } else { 0 }
/// };
/// assert_eq!(evaluate_with("VERSION >= 200 && VERSION < 400", &mut resolver), Ok(1));
/// ```
pub fn evaluate_with(
    source: &str,
    resolver: &mut dyn SymbolResolver,
) -> Result<i32, PpError> {
    let mut evaluator = PpExprParser::new(source);
    evaluator.parse_with(resolver)
}

/// The conditional-expression evaluator.
///
/// Owns one source buffer and one [`SymTab`] for one `parse` call. Not
/// reentrant and not reusable; the symbol accessors remain valid after the
/// parse so the surrounding compiler can inspect what was interned.
///
/// # Examples
/// ```rust
/// # use ppexpr::PpExprParser;
/// let mut evaluator = PpExprParser::new("FOO || 2 == 2");
/// assert_eq!(evaluator.parse(), Ok(1));
/// assert_eq!(evaluator.result(), Some(1));
/// assert_eq!(evaluator.symbol(0).unwrap(), "FOO");
/// ```
#[derive(Debug)]
pub struct PpExprParser {
    source: String,
    symtab: SymTab,
    result: Option<i32>,
    parsed: bool,
}

impl PpExprParser {
    /// Creates an evaluator owning `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            symtab: SymTab::new(),
            result: None,
            parsed: false,
        }
    }

    /// Runs the full pipeline once with no resolver (identifiers are 0).
    pub fn parse(&mut self) -> Result<i32, PpError> {
        let mut zero = |_: &str| -> i32 { 0 };
        self.parse_with(&mut zero)
    }

    /// Runs the full pipeline once, resolving identifiers through
    /// `resolver`.
    ///
    /// On failure the diagnostic is reported through the fatal sink exactly
    /// once and the error is returned; no result is stored. A second call
    /// on the same instance fails with [`PpError::AlreadyParsed`].
    pub fn parse_with(&mut self, resolver: &mut dyn SymbolResolver) -> Result<i32, PpError> {
        if self.parsed {
            return Err(PpError::AlreadyParsed);
        }
        self.parsed = true;

        let mut lexer = PpLexer::new(&self.source);
        match PpParser::new(&mut lexer, &mut self.symtab, resolver).parse() {
            Ok(value) => {
                self.result = Some(value);
                Ok(value)
            }
            Err(err) => {
                log::error!(target: "ppexpr", "{err}");
                Err(err)
            }
        }
    }

    /// The result of a successful parse, if any.
    pub fn result(&self) -> Option<i32> {
        self.result
    }

    /// The text of the interned identifier occurrence at `index`.
    pub fn symbol(&self, index: usize) -> Result<&str, SymTabError> {
        self.symtab.resolve(index)
    }

    /// Number of interned identifier occurrences (not unique names).
    pub fn symbol_count(&self) -> usize {
        self.symtab.len()
    }
}
