//! Handwritten glyphs: `(d)H` digits drawn with fewer sticks.

use super::{RuleSet, RuleSetBuilder, StickCount};
use crate::symbol::Symbol::{self, *};

const ADD_ONE: &[(Symbol, Symbol)] = &[
    (HandZero, HandSix),
    (HandZero, HandNine),
    (HandOne, HandSeven),
    (HandOne, HandEleven),
    (HandOne, Plus),
    (Blank, HandOne),
    (Plus, HandFour),
    (Minus, HandSeven),
    (Minus, Plus),
    (Minus, Equals),
    (Blank, Minus),
];

const TRANSFORM_ONE: &[(Symbol, Symbol)] = &[
    (HandOne, Minus),
    (Two, Three),
    (Three, Five),
    (Three, HandNine),
    (Five, HandSix),
    (Five, HandNine),
    (HandSix, HandNine),
    (HandSeven, HandEleven),
    (HandSeven, Plus),
    (HandSeven, Equals),
    (Plus, HandEleven),
    (Plus, Equals),
    (Times, Divide),
];

const TRANSFORM_TWO: &[(Symbol, Symbol)] = &[
    (Times, Equals),
    (Times, Plus),
    (Times, Divide),
    (Times, HandSeven),
    (Times, HandEleven),
    (Equals, Plus),
    (Equals, Divide),
    (Equals, HandSeven),
    (Equals, HandEleven),
    (Plus, Divide),
    (Plus, HandSeven),
    (Plus, HandEleven),
    (Divide, HandSeven),
    (Divide, HandEleven),
    (HandSeven, HandEleven),
    (Five, Two),
    (HandNine, Two),
    (HandSix, Two),
];

const ADD_TWO: &[(Symbol, Symbol)] = &[
    (Blank, Times),
    (Blank, Equals),
    (Blank, Plus),
    (Blank, Divide),
    (Blank, HandSeven),
    (Blank, HandEleven),
    (HandOne, HandFour),
    (Minus, HandFour),
    (Equals, HandZero),
    (HandSeven, HandZero),
    (HandEleven, HandZero),
    (Five, Eight),
    (HandNine, Eight),
    (HandSix, Eight),
    (Three, Eight),
    (Two, Eight),
];

/// Rules for handwritten digits mixed with plain `2 3 5 8` and operators.
pub fn handwritten_rules() -> RuleSet {
    RuleSetBuilder::new()
        .additions(StickCount::One, ADD_ONE)
        .transforms(StickCount::One, TRANSFORM_ONE)
        .additions(StickCount::Two, ADD_TWO)
        .transforms(StickCount::Two, TRANSFORM_TWO)
        .build()
}
