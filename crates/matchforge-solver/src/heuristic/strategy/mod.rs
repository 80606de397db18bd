//! Mutation strategies.
//!
//! A one-stick search runs [`MutationStrategy::ONE_STICK`] in order; a
//! two-stick search runs [`MutationStrategy::TWO_STICK`]. Output order is
//! the concatenation of the strategies' outputs, and each strategy visits
//! positions left to right and rule targets in declaration order.

mod combined;
mod merge;
mod relocate;
mod transform;
mod transform_relocate;
mod transform_twice;


use std::fmt;
use std::ops::ControlFlow;

use matchforge_config::MoveCount;
use matchforge_core::{RuleSet, StickCount, TokenSequence};

use super::MutationArena;
use crate::termination::Termination;

pub use combined::combined;
pub use merge::merge;
pub use relocate::relocate;
pub use transform::transform;
pub use transform_relocate::transform_and_relocate;
pub use transform_twice::transform_twice;

/// One way of turning an equation into candidate equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationStrategy {
    /// Sticks move within a single glyph.
    Transform(StickCount),
    /// Sticks leave one glyph and land on another or in a gap.
    Relocate(StickCount),
    /// Adjacent `1 1` becomes a target of the `11` glyph.
    Merge,
    /// Two independent one-stick relocations.
    CombinedRelocation,
    /// Two one-stick transforms on different glyphs.
    TransformTwice,
    /// A one-stick transform plus a one-stick relocation.
    TransformAndRelocate,
}

impl MutationStrategy {
    pub const ONE_STICK: [MutationStrategy; 3] = [
        MutationStrategy::Transform(StickCount::One),
        MutationStrategy::Relocate(StickCount::One),
        MutationStrategy::Merge,
    ];

    pub const TWO_STICK: [MutationStrategy; 5] = [
        MutationStrategy::Transform(StickCount::Two),
        MutationStrategy::Relocate(StickCount::Two),
        MutationStrategy::CombinedRelocation,
        MutationStrategy::TransformTwice,
        MutationStrategy::TransformAndRelocate,
    ];

    /// The strategies run for `move_count`, in order.
    pub fn pipeline(move_count: MoveCount) -> &'static [MutationStrategy] {
        match move_count {
            MoveCount::One => &Self::ONE_STICK,
            MoveCount::Two => &Self::TWO_STICK,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MutationStrategy::Transform(StickCount::One) => "transform",
            MutationStrategy::Transform(StickCount::Two) => "transform2",
            MutationStrategy::Relocate(StickCount::One) => "relocate",
            MutationStrategy::Relocate(StickCount::Two) => "relocate2",
            MutationStrategy::Merge => "merge",
            MutationStrategy::CombinedRelocation => "combined_relocation",
            MutationStrategy::TransformTwice => "transform_twice",
            MutationStrategy::TransformAndRelocate => "transform_and_relocate",
        }
    }

    /// Pushes every candidate of this strategy for `plain` into `arena`.
    ///
    /// `plain` is a tokenized equation without blank sites; strategies that
    /// need insertion sites wrap it themselves.
    pub fn generate<T: Termination>(
        &self,
        plain: &TokenSequence,
        rules: &RuleSet,
        arena: &mut MutationArena<T>,
    ) -> ControlFlow<()> {
        match *self {
            MutationStrategy::Transform(sticks) => {
                transform(&plain.wrapped(), rules.transforms(sticks), arena)
            }
            MutationStrategy::Relocate(sticks) => relocate(
                &plain.wrapped(),
                rules.removals(sticks),
                rules.additions(sticks),
                arena,
            ),
            MutationStrategy::Merge => merge(plain, rules.transforms(StickCount::One), arena),
            MutationStrategy::CombinedRelocation => combined(&plain.wrapped(), rules, arena),
            MutationStrategy::TransformTwice => {
                transform_twice(&plain.wrapped(), rules.transforms(StickCount::One), arena)
            }
            MutationStrategy::TransformAndRelocate => {
                transform_and_relocate(&plain.wrapped(), rules, arena)
            }
        }
    }
}

impl fmt::Display for MutationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs the whole pipeline for `move_count` on one tokenization.
pub fn generate_all<T: Termination>(
    plain: &TokenSequence,
    rules: &RuleSet,
    move_count: MoveCount,
    arena: &mut MutationArena<T>,
) -> ControlFlow<()> {
    for strategy in MutationStrategy::pipeline(move_count) {
        strategy.generate(plain, rules, arena)?;
    }
    ControlFlow::Continue(())
}
