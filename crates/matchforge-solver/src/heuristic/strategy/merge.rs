//! Two adjacent `1` glyphs read as the two-stick `11`.

use std::ops::ControlFlow;

use matchforge_core::{RuleTable, Symbol, TokenSequence};

use crate::heuristic::MutationArena;
use crate::termination::Termination;

/// Replaces each adjacent `1 1` pair by every transform target of `11`.
///
/// Works on the unwrapped sequence: a blank between the ones would split them.
pub fn merge<T: Termination>(
    plain: &TokenSequence,
    transforms: &RuleTable,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    let targets = transforms.get(Symbol::Eleven);
    if targets.is_empty() {
        return ControlFlow::Continue(());
    }
    for index in 0..plain.len().saturating_sub(1) {
        if plain[index] == Symbol::One && plain[index + 1] == Symbol::One {
            for &target in targets {
                arena.push(plain.merged(index, target))?;
            }
        }
    }
    ControlFlow::Continue(())
}
