//! Stick rule tables.
//!
//! A [`RuleSet`] answers three questions for every symbol and for one or two
//! sticks: what it becomes when sticks are moved within it (transform), when
//! sticks are laid on it (addition), and when sticks are taken off it
//! (removal). Additions and removals are two views of the same declarations,
//! so the builder writes both at once.

mod handwritten;
mod registry;
mod standard;


use std::fmt;

use smallvec::SmallVec;

use crate::error::{MatchForgeError, Result};
use crate::symbol::Symbol;

pub use handwritten::handwritten_rules;
pub use registry::RuleRegistry;
pub use standard::standard_rules;

/// How many sticks a single rule moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickCount {
    One,
    Two,
}

impl StickCount {
    const fn slot(self) -> usize {
        match self {
            StickCount::One => 0,
            StickCount::Two => 1,
        }
    }
}

/// Targets per symbol, in declaration order.
pub type Targets = SmallVec<[Symbol; 4]>;

/// One mapping `Symbol -> [Symbol]`, indexed by [`Symbol::index`].
#[derive(Clone, PartialEq, Eq)]
pub struct RuleTable {
    entries: [Targets; Symbol::COUNT],
}

impl RuleTable {
    pub fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| Targets::new()),
        }
    }

    /// Targets reachable from `symbol`; empty when no rule applies.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> &[Symbol] {
        &self.entries[symbol.index()]
    }

    pub fn contains(&self, from: Symbol, to: Symbol) -> bool {
        self.get(from).contains(&to)
    }

    /// Appends `to` to the targets of `from` unless already present.
    fn insert(&mut self, from: Symbol, to: Symbol) {
        let targets = &mut self.entries[from.index()];
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Iterates `(from, to)` pairs in symbol order, then declaration order.
    pub fn pairs(&self) -> impl Iterator<Item = (Symbol, Symbol)> + '_ {
        Symbol::ALL
            .iter()
            .flat_map(move |&from| self.get(from).iter().map(move |&to| (from, to)))
    }

    /// Total number of `(from, to)` entries.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|t| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                Symbol::ALL
                    .iter()
                    .filter(|s| !self.get(**s).is_empty())
                    .map(|s| (s, self.get(*s))),
            )
            .finish()
    }
}

/// The six rule tables of one display mode.
///
/// Build with [`RuleSetBuilder`]; a built set is immutable and is shared
/// between solvers behind an `Arc`.
///
/// # Example
///
/// ```
/// use matchforge_core::{RuleSetBuilder, StickCount, Symbol};
///
/// let rules = RuleSetBuilder::new()
///     .add(Symbol::Six, Symbol::Eight)
///     .transform(Symbol::Six, Symbol::Nine)
///     .build();
///
/// assert_eq!(rules.additions(StickCount::One).get(Symbol::Six), &[Symbol::Eight]);
/// assert_eq!(rules.removals(StickCount::One).get(Symbol::Eight), &[Symbol::Six]);
/// assert_eq!(rules.transforms(StickCount::One).get(Symbol::Nine), &[Symbol::Six]);
/// assert!(rules.verify().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    transforms: [RuleTable; 2],
    additions: [RuleTable; 2],
    removals: [RuleTable; 2],
}

impl RuleSet {
    /// Symbols reachable by moving `sticks` within a glyph.
    #[inline]
    pub fn transforms(&self, sticks: StickCount) -> &RuleTable {
        &self.transforms[sticks.slot()]
    }

    /// Symbols reachable by laying `sticks` on a glyph.
    #[inline]
    pub fn additions(&self, sticks: StickCount) -> &RuleTable {
        &self.additions[sticks.slot()]
    }

    /// Symbols left after taking `sticks` off a glyph.
    #[inline]
    pub fn removals(&self, sticks: StickCount) -> &RuleTable {
        &self.removals[sticks.slot()]
    }

    /// Number of declared rules: one per addition and one per transform pair.
    pub fn rule_count(&self) -> usize {
        let mut count = 0;
        for sticks in [StickCount::One, StickCount::Two] {
            count += self.additions(sticks).len();
            count += self.transforms(sticks).len() / 2;
        }
        count
    }

    /// Checks that additions mirror removals and transforms are symmetric.
    pub fn verify(&self) -> Result<()> {
        for sticks in [StickCount::One, StickCount::Two] {
            let adds = self.additions(sticks);
            let subs = self.removals(sticks);
            let trans = self.transforms(sticks);

            for (from, to) in adds.pairs() {
                if !subs.contains(to, from) {
                    return Err(asymmetry("addition", sticks, from, to));
                }
            }
            for (from, to) in subs.pairs() {
                if !adds.contains(to, from) {
                    return Err(asymmetry("removal", sticks, from, to));
                }
            }
            for (from, to) in trans.pairs() {
                if !trans.contains(to, from) {
                    return Err(asymmetry("transform", sticks, from, to));
                }
            }
        }
        Ok(())
    }
}

fn asymmetry(kind: &str, sticks: StickCount, from: Symbol, to: Symbol) -> MatchForgeError {
    MatchForgeError::Config(format!(
        "asymmetric {kind} rule {from:?} -> {to:?} ({sticks:?} stick)"
    ))
}

/// Declares the rules of a mode.
///
/// Every declaration writes both directions, so a built [`RuleSet`] always
/// passes [`RuleSet::verify`].
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Laying one stick on `from` yields `to`.
    pub fn add(self, from: Symbol, to: Symbol) -> Self {
        self.add_sticks(StickCount::One, from, to)
    }

    /// Moving one stick turns `a` into `b` and back.
    pub fn transform(self, a: Symbol, b: Symbol) -> Self {
        self.transform_sticks(StickCount::One, a, b)
    }

    /// Laying two sticks on `from` yields `to`.
    pub fn add2(self, from: Symbol, to: Symbol) -> Self {
        self.add_sticks(StickCount::Two, from, to)
    }

    /// Moving two sticks turns `a` into `b` and back.
    pub fn transform2(self, a: Symbol, b: Symbol) -> Self {
        self.transform_sticks(StickCount::Two, a, b)
    }

    pub fn add_sticks(mut self, sticks: StickCount, from: Symbol, to: Symbol) -> Self {
        self.rules.additions[sticks.slot()].insert(from, to);
        self.rules.removals[sticks.slot()].insert(to, from);
        self
    }

    pub fn transform_sticks(mut self, sticks: StickCount, a: Symbol, b: Symbol) -> Self {
        self.rules.transforms[sticks.slot()].insert(a, b);
        self.rules.transforms[sticks.slot()].insert(b, a);
        self
    }

    /// Declares a batch of additions in order.
    pub fn additions(self, sticks: StickCount, pairs: &[(Symbol, Symbol)]) -> Self {
        pairs
            .iter()
            .fold(self, |b, &(from, to)| b.add_sticks(sticks, from, to))
    }

    /// Declares a batch of transforms in order.
    pub fn transforms(self, sticks: StickCount, pairs: &[(Symbol, Symbol)]) -> Self {
        pairs
            .iter()
            .fold(self, |b, &(x, y)| b.transform_sticks(sticks, x, y))
    }

    pub fn build(self) -> RuleSet {
        self.rules
    }
}
