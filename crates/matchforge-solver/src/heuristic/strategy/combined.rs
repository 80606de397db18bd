//! Two independent one-stick relocations.

use std::ops::ControlFlow;

use matchforge_core::{RuleSet, StickCount, TokenSequence};

use super::relocate::place;
use crate::heuristic::site::{insertions, rewrites};
use crate::heuristic::MutationArena;
use crate::termination::Termination;

/// Relocates one stick, then relocates another one.
///
/// The second stick may come from any position except the one that just
/// received the first stick. It may come from the glyph that gave up the
/// first one, which is how the `8` of `41+29=78` loses two sticks on the way
/// to `47+28=75`.
pub fn combined<T: Termination>(
    wrapped: &TokenSequence,
    rules: &RuleSet,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    let removals = rules.removals(StickCount::One);
    let additions = rules.additions(StickCount::One);

    for first in rewrites(wrapped, removals, &[]) {
        let lighter = first.rewrite(wrapped);
        for addition in rewrites(&lighter, additions, &[first.index]) {
            second_relocation(&addition.rewrite(&lighter), addition.index, rules, arena)?;
        }
        for insertion in insertions(&lighter, additions) {
            second_relocation(&insertion.insert(&lighter), insertion.index, rules, arena)?;
        }
    }
    ControlFlow::Continue(())
}

fn second_relocation<T: Termination>(
    seq: &TokenSequence,
    received: usize,
    rules: &RuleSet,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    let additions = rules.additions(StickCount::One);
    for removal in rewrites(seq, rules.removals(StickCount::One), &[received]) {
        place(&removal.rewrite(seq), additions, &[removal.index], arena)?;
    }
    ControlFlow::Continue(())
}
