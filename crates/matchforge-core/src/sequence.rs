//! Token sequences and the blank-stripping normalization.

use std::fmt;
use std::ops::Deref;

use crate::symbol::Symbol;

/// An equation in progress: an ordered list of symbols, possibly with
/// [`Symbol::Blank`] placeholders between real glyphs.
///
/// Sequences are compared for puzzle purposes through [`normalize`], which
/// drops every blank; two sequences with equal normalized strings describe the
/// same equation.
///
/// # Example
///
/// ```
/// use matchforge_core::{Symbol, TokenSequence};
///
/// let seq = TokenSequence::from(vec![Symbol::Six, Symbol::Plus, Symbol::Four]);
/// let wrapped = seq.wrapped();
/// assert_eq!(wrapped.len(), 7);
/// assert_eq!(wrapped.normalized(), "6+4");
/// assert_eq!(wrapped.to_string(), " 6 + 4 ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct TokenSequence {
    symbols: Vec<Symbol>,
}

impl TokenSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Surrounds every symbol with a blank: `a b` becomes `_ a _ b _`.
    ///
    /// The blanks are the sites where a stick may be added.
    pub fn wrapped(&self) -> TokenSequence {
        let mut out = TokenSequence::with_capacity(self.symbols.len() * 2 + 1);
        out.push(Symbol::Blank);
        for &symbol in &self.symbols {
            out.push(symbol);
            out.push(Symbol::Blank);
        }
        out
    }

    /// Returns a copy with the symbol at `index` replaced.
    pub fn replaced(&self, index: usize, symbol: Symbol) -> TokenSequence {
        let mut symbols = self.symbols.clone();
        symbols[index] = symbol;
        TokenSequence { symbols }
    }

    /// Returns a copy with `symbol` inserted before `index` (`index == len` appends).
    pub fn inserted(&self, index: usize, symbol: Symbol) -> TokenSequence {
        let mut symbols = Vec::with_capacity(self.symbols.len() + 1);
        symbols.extend_from_slice(&self.symbols[..index]);
        symbols.push(symbol);
        symbols.extend_from_slice(&self.symbols[index..]);
        TokenSequence { symbols }
    }

    /// Returns a copy with the pair at `index` and `index + 1` fused into `symbol`.
    pub fn merged(&self, index: usize, symbol: Symbol) -> TokenSequence {
        let mut symbols = Vec::with_capacity(self.symbols.len() - 1);
        symbols.extend_from_slice(&self.symbols[..index]);
        symbols.push(symbol);
        symbols.extend_from_slice(&self.symbols[index + 2..]);
        TokenSequence { symbols }
    }

    /// The equation string without blanks.
    pub fn normalized(&self) -> String {
        normalize(&self.symbols)
    }
}

/// Concatenates the glyphs of `symbols`, skipping blanks.
pub fn normalize(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .filter(|s| !s.is_blank())
        .map(|s| s.as_str())
        .collect()
}

impl Deref for TokenSequence {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl AsRef<[Symbol]> for TokenSequence {
    fn as_ref(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl From<Vec<Symbol>> for TokenSequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl FromIterator<Symbol> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

/// Renders every glyph, blanks as spaces.
impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            f.write_str(symbol.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    fn seq(symbols: &[Symbol]) -> TokenSequence {
        TokenSequence::from(symbols.to_vec())
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let s = seq(&[Blank, HandSix, Blank, Plus, Eleven, Blank, Equals, Seven]);
        let once = s.normalized();
        assert_eq!(once, "(6)H+11=7");

        let reparsed: TokenSequence = s.iter().copied().filter(|s| !s.is_blank()).collect();
        assert_eq!(reparsed.normalized(), once);
    }

    #[test]
    fn test_normalize_ignores_blank_placement() {
        let a = seq(&[Blank, One, Plus, Blank, Blank, One, Equals, Two]);
        let b = seq(&[One, Blank, Plus, One, Equals, Blank, Two, Blank]);
        assert_eq!(a.normalized(), b.normalized());
    }

    #[test]
    fn test_wrapped_layout() {
        let w = seq(&[Eight, Minus]).wrapped();
        assert_eq!(w.symbols(), &[Blank, Eight, Blank, Minus, Blank]);
    }

    #[test]
    fn test_edits_leave_original_untouched() {
        let base = seq(&[One, One, Equals, Two]);

        assert_eq!(base.replaced(3, Three).symbols(), &[One, One, Equals, Three]);
        assert_eq!(base.inserted(0, Minus).symbols(), &[Minus, One, One, Equals, Two]);
        assert_eq!(base.inserted(4, Minus).symbols(), &[One, One, Equals, Two, Minus]);
        assert_eq!(base.merged(0, Four).symbols(), &[Four, Equals, Two]);
        assert_eq!(base.symbols(), &[One, One, Equals, Two]);
    }

    #[test]
    fn test_display_keeps_blanks() {
        assert_eq!(seq(&[Blank, Nine, Blank]).to_string(), " 9 ");
    }
}
