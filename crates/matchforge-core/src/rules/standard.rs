//! Seven-segment glyphs.

use super::{RuleSet, RuleSetBuilder, StickCount};
use crate::symbol::Symbol::{self, *};

const ADD_ONE: &[(Symbol, Symbol)] = &[
    (Minus, Plus),
    (Minus, Equals),
    (Zero, Eight),
    (One, Seven),
    (Three, Nine),
    (Five, Nine),
    (Five, Six),
    (Six, Eight),
    (Nine, Eight),
    (Blank, Minus),
];

const TRANSFORM_ONE: &[(Symbol, Symbol)] = &[
    (One, Plus),
    (Zero, Six),
    (Zero, Nine),
    (Three, Five),
    (Three, Two),
    (Six, Nine),
    (Plus, Equals),
    (Times, Divide),
    // `11` is two glyphs wide; the merge strategy reads this entry.
    (Eleven, Four),
];

const TRANSFORM_TWO: &[(Symbol, Symbol)] = &[
    (Plus, Times),
    (Plus, Divide),
    (Plus, One),
    (Equals, Times),
    (Equals, Divide),
    (Equals, One),
    (Times, One),
    (Divide, One),
    (Five, Two),
];

const ADD_TWO: &[(Symbol, Symbol)] = &[
    (Blank, Plus),
    (Blank, Times),
    (Blank, Divide),
    (Blank, Equals),
    (Blank, One),
    (Minus, Seven),
    (One, Four),
    (Seven, Three),
    (Eleven, Zero),
    (Four, Nine),
    (Five, Eight),
    (Three, Eight),
    (Two, Eight),
];

/// Rules for seven-segment digits and stick operators.
pub fn standard_rules() -> RuleSet {
    RuleSetBuilder::new()
        .additions(StickCount::One, ADD_ONE)
        .transforms(StickCount::One, TRANSFORM_ONE)
        .transforms(StickCount::Two, TRANSFORM_TWO)
        .additions(StickCount::Two, ADD_TWO)
        .build()
}
