//! # symtab
//!
//! A minimal, append-only symbol table for conditional-expression
//! identifiers.
//!
//! Each occurrence of an identifier is *interned*: its text is appended and
//! assigned the next integer index, in first-seen order. Lookup by index
//! returns the exact original text.
//!
//! Unlike a de-duplicating interner, this table appends on **every**
//! occurrence — interning the same text twice yields two indices. That is the
//! observable behavior of the reference implementation (the grammar only ever
//! resolves an index immediately after the lexer hands it over, so duplicate
//! entries are harmless there), and it is preserved here deliberately.
//!
//! ## Example
//! ```rust
//! # use ppexpr::SymTab;
//! let mut st = SymTab::new();
//! let i = st.intern("foo"); // appends "foo" at index 0
//! assert_eq!(i, 0);
//! assert_eq!(st.resolve(i).unwrap(), "foo");
//! assert_eq!(st.intern("foo"), 1); // appended again, new index
//! ```

use smartstring::alias::String;
use thiserror::Error;

/// Errors that can occur when operating on a [`SymTab`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymTabError {
    /// Attempted to access an invalid index (out of bounds).
    #[error("invalid symbol index {index} (table length {len})")]
    InvalidIndex {
        /// The index that was requested.
        index: usize,
        /// The number of entries currently in the table.
        len: usize,
    },
}

/// An ordered sequence of interned identifier strings.
///
/// Indices are assigned in insertion order starting from 0 and are never
/// reused or reordered within one evaluator run. There is no removal
/// operation.
#[derive(Debug)]
pub struct SymTab {
    tab: Vec<String>,
}

impl SymTab {
    /// Creates a new, empty symbol table.
    pub fn new() -> Self {
        Self { tab: Vec::new() }
    }

    /// Returns the number of entries currently stored in the symbol table.
    ///
    /// Each entry corresponds to one interned *occurrence*, not one unique
    /// identifier.
    ///
    /// # Example
    /// ```rust
    /// # use ppexpr::SymTab;
    /// let mut symtab = SymTab::new();
    /// assert_eq!(symtab.len(), 0);
    /// symtab.intern("foo");
    /// symtab.intern("baz");
    /// symtab.intern("foo");
    /// assert_eq!(symtab.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.tab.len()
    }

    /// Returns `true` if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    /// Appends the given name and returns its index.
    ///
    /// Always appends, even when the same text was interned before; the
    /// returned index is `len() - 1` after the call.
    ///
    /// # Examples
    /// ```
    /// # use ppexpr::SymTab;
    /// let mut st = SymTab::new();
    /// assert_eq!(st.intern("a"), 0);
    /// assert_eq!(st.intern("a"), 1); // no de-duplication
    /// ```
    pub fn intern(&mut self, name: impl AsRef<str>) -> usize {
        self.tab.push(String::from(name.as_ref()));
        self.tab.len() - 1
    }

    /// Returns the text stored at the given index.
    ///
    /// Returns [`Err`] if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use ppexpr::SymTab;
    /// let mut st = SymTab::new();
    /// let i = st.intern("x");
    /// assert_eq!(st.resolve(i).unwrap(), "x");
    /// assert!(st.resolve(99).is_err());
    /// ```
    pub fn resolve(&self, index: usize) -> Result<&str, SymTabError> {
        self.tab
            .get(index)
            .map(|s| s.as_str())
            .ok_or(SymTabError::InvalidIndex {
                index,
                len: self.tab.len(),
            })
    }
}
