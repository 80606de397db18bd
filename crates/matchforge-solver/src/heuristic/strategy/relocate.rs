//! Taking sticks off one glyph and laying them elsewhere.

use std::ops::ControlFlow;

use matchforge_core::{RuleTable, TokenSequence};

use crate::heuristic::site::{insertions, rewrites};
use crate::heuristic::MutationArena;
use crate::termination::Termination;

/// Removes sticks at one position, then places them with [`place`].
pub fn relocate<T: Termination>(
    wrapped: &TokenSequence,
    removals: &RuleTable,
    additions: &RuleTable,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    for removal in rewrites(wrapped, removals, &[]) {
        let lighter = removal.rewrite(wrapped);
        place(&lighter, additions, &[removal.index], arena)?;
    }
    ControlFlow::Continue(())
}

/// Lays the loose sticks on an untouched position, or as a new glyph in any gap.
pub(crate) fn place<T: Termination>(
    lighter: &TokenSequence,
    additions: &RuleTable,
    touched: &[usize],
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    for addition in rewrites(lighter, additions, touched) {
        arena.push(addition.rewrite(lighter))?;
    }
    for insertion in insertions(lighter, additions) {
        arena.push(insertion.insert(lighter))?;
    }
    ControlFlow::Continue(())
}
