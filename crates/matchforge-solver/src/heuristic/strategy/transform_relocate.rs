//! A one-stick transform followed by a one-stick relocation elsewhere.

use std::ops::ControlFlow;

use matchforge_core::{RuleSet, StickCount, TokenSequence};

use super::relocate::place;
use crate::heuristic::site::rewrites;
use crate::heuristic::MutationArena;
use crate::termination::Termination;

/// Transforms at `i`, removes at `j != i`, and adds at `k` outside `{i, j}` or in a gap.
pub fn transform_and_relocate<T: Termination>(
    wrapped: &TokenSequence,
    rules: &RuleSet,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    let additions = rules.additions(StickCount::One);
    for transform in rewrites(wrapped, rules.transforms(StickCount::One), &[]) {
        let transformed = transform.rewrite(wrapped);
        for removal in rewrites(&transformed, rules.removals(StickCount::One), &[transform.index]) {
            let lighter = removal.rewrite(&transformed);
            place(&lighter, additions, &[transform.index, removal.index], arena)?;
        }
    }
    ControlFlow::Continue(())
}
