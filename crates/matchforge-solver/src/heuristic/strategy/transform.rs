//! Moving sticks within one glyph.

use std::ops::ControlFlow;

use matchforge_core::{RuleTable, TokenSequence};

use crate::heuristic::site::rewrites;
use crate::heuristic::MutationArena;
use crate::termination::Termination;

/// Rewrites each position to each of its transform targets.
pub fn transform<T: Termination>(
    wrapped: &TokenSequence,
    transforms: &RuleTable,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    for site in rewrites(wrapped, transforms, &[]) {
        arena.push(site.rewrite(wrapped))?;
    }
    ControlFlow::Continue(())
}
