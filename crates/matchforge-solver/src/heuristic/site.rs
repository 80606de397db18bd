//! Generators of edit sites.
//!
//! Every strategy is a nesting of two primitive generators: [`rewrites`],
//! which yields each symbol an existing position can become under a rule
//! table, and [`insertions`], which yields each symbol a rule table lets
//! appear out of nothing at each gap.

use matchforge_core::{RuleTable, Symbol, TokenSequence};

/// A position paired with the symbol to put there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub index: usize,
    pub symbol: Symbol,
}

impl Site {
    /// `seq` with this site's symbol written over `index`.
    #[inline]
    pub fn rewrite(&self, seq: &TokenSequence) -> TokenSequence {
        seq.replaced(self.index, self.symbol)
    }

    /// `seq` with this site's symbol inserted before `index`.
    #[inline]
    pub fn insert(&self, seq: &TokenSequence) -> TokenSequence {
        seq.inserted(self.index, self.symbol)
    }
}

/// Every `(position, target)` the table allows, skipping `touched` positions.
///
/// Positions are visited left to right; targets in declaration order.
pub fn rewrites<'a>(
    seq: &'a TokenSequence,
    table: &'a RuleTable,
    touched: &'a [usize],
) -> impl Iterator<Item = Site> + 'a {
    seq.iter()
        .enumerate()
        .filter(move |(index, _)| !touched.contains(index))
        .flat_map(move |(index, &from)| {
            table
                .get(from)
                .iter()
                .map(move |&symbol| Site { index, symbol })
        })
}

/// Every gap `0..=len` paired with every symbol the table adds to a blank.
pub fn insertions<'a>(
    seq: &'a TokenSequence,
    table: &'a RuleTable,
) -> impl Iterator<Item = Site> + 'a {
    let targets = table.get(Symbol::Blank);
    (0..=seq.len()).flat_map(move |index| targets.iter().map(move |&symbol| Site { index, symbol }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchforge_core::{standard_rules, tokenize, StickCount};
    use Symbol::*;

    #[test]
    fn test_rewrites_order_and_skip() {
        let rules = standard_rules();
        let seq = tokenize("06").unwrap();
        let sites: Vec<_> = rewrites(&seq, rules.transforms(StickCount::One), &[]).collect();
        assert_eq!(
            sites,
            vec![
                Site { index: 0, symbol: Six },
                Site { index: 0, symbol: Nine },
                Site { index: 1, symbol: Zero },
                Site { index: 1, symbol: Nine },
            ]
        );

        let skipped: Vec<_> = rewrites(&seq, rules.transforms(StickCount::One), &[0]).collect();
        assert_eq!(skipped.len(), 2);
        assert!(skipped.iter().all(|s| s.index == 1));
    }

    #[test]
    fn test_insertions_cover_both_ends() {
        let rules = standard_rules();
        let seq = tokenize("7").unwrap();
        let sites: Vec<_> = insertions(&seq, rules.additions(StickCount::One)).collect();
        assert_eq!(
            sites,
            vec![
                Site { index: 0, symbol: Minus },
                Site { index: 1, symbol: Minus },
            ]
        );
        assert_eq!(sites[1].insert(&seq).normalized(), "7-");
    }
}
