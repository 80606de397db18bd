//! Two one-stick transforms on different glyphs.

use std::ops::ControlFlow;

use matchforge_core::{RuleTable, TokenSequence};

use crate::heuristic::site::rewrites;
use crate::heuristic::MutationArena;
use crate::termination::Termination;

pub fn transform_twice<T: Termination>(
    wrapped: &TokenSequence,
    transforms: &RuleTable,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    for first in rewrites(wrapped, transforms, &[]) {
        let once = first.rewrite(wrapped);
        for second in rewrites(&once, transforms, &[first.index]) {
            arena.push(second.rewrite(&once))?;
        }
    }
    ControlFlow::Continue(())
}
