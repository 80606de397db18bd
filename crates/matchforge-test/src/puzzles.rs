//! Puzzles with known outcomes.
//!
//! `others` and `total_mutations` pin the exact search, not just its
//! answers: any change to rule order, strategy order or filtering shows up
//! here first.

use matchforge_config::{MoveCount, SolverConfig};

/// One equation and what solving it must produce.
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub mode: &'static str,
    pub move_count: MoveCount,
    pub equation: &'static str,
    pub max_mutations: usize,
    /// Solutions in order.
    pub solutions: &'static [&'static str],
    /// Number of distinct non-solutions.
    pub others: usize,
    pub total_mutations: usize,
}

impl Puzzle {
    /// Solver configuration reproducing this fixture.
    pub fn config(&self) -> SolverConfig {
        SolverConfig::new()
            .with_mode(self.mode)
            .with_move_count(self.move_count)
            .with_max_mutations(self.max_mutations)
    }

    /// True when the budget cut the search short.
    pub fn is_truncated(&self) -> bool {
        self.total_mutations == self.max_mutations
    }
}

const fn standard(
    move_count: MoveCount,
    equation: &'static str,
    max_mutations: usize,
    solutions: &'static [&'static str],
    others: usize,
    total_mutations: usize,
) -> Puzzle {
    Puzzle {
        mode: "standard",
        move_count,
        equation,
        max_mutations,
        solutions,
        others,
        total_mutations,
    }
}

const fn handwritten(
    move_count: MoveCount,
    equation: &'static str,
    max_mutations: usize,
    solutions: &'static [&'static str],
    others: usize,
    total_mutations: usize,
) -> Puzzle {
    Puzzle {
        mode: "handwritten",
        move_count,
        equation,
        max_mutations,
        solutions,
        others,
        total_mutations,
    }
}

pub const STANDARD_ONE_STICK: &[Puzzle] = &[
    standard(MoveCount::One, "8+3-4=0", 10_000, &["8+3-11=0", "9+3-4=8"], 30, 174),
    standard(MoveCount::One, "6-5=17", 10_000, &["6+5=11"], 27, 110),
    standard(MoveCount::One, "5+7=2", 10_000, &["9-7=2", "5-7=-2"], 9, 65),
    standard(MoveCount::One, "9/3=2", 10_000, &["6/3=2", "9/3=3"], 10, 65),
    standard(MoveCount::One, "6+4=4", 10_000, &["0+4=4", "8-4=4"], 8, 63),
    standard(MoveCount::One, "0+1=1", 10_000, &["0-1=-1"], 7, 49),
    standard(MoveCount::One, "1+1=11", 10_000, &[], 6, 46),
    standard(MoveCount::One, "1111=4", 10_000, &[], 5, 45),
    standard(MoveCount::One, "3x3=9", 10_000, &[], 15, 69),
    standard(MoveCount::One, "1+1=2", 10_000, &[], 6, 46),
    standard(MoveCount::One, "7-1=6", 10_000, &[], 16, 89),
];

/// A budget small enough to cut the search.
pub const STANDARD_TRUNCATED: Puzzle =
    standard(MoveCount::One, "8+3-4=0", 50, &["8+3-11=0"], 15, 50);

pub const STANDARD_TWO_STICK: &[Puzzle] = &[
    standard(
        MoveCount::Two,
        "41+29=78",
        10_000,
        &["44+29=73", "-41-29=-70", "-4-1+23=18", "-41+23=-18"],
        479,
        10_000,
    ),
    standard(
        MoveCount::Two,
        "41+29=78",
        100_000,
        &[
            "44+29=73",
            "-41-29=-70",
            "-4-1+23=18",
            "-41+23=-18",
            "47+28=75",
            "41+38=79",
        ],
        926,
        51_332,
    ),
    standard(MoveCount::Two, "6+4=4", 10_000, &["0-4=-4"], 76, 3_997),
];

pub const HANDWRITTEN_ONE_STICK: &[Puzzle] = &[
    handwritten(
        MoveCount::One,
        "(0)H+(6)H=(9)H",
        10_000,
        &["(0)H+(9)H=(9)H", "(0)H+(6)H=(6)H", "(9)H+(0)H=(9)H"],
        45,
        203,
    ),
    handwritten(
        MoveCount::One,
        "(0)h+(6)h=(9)h",
        10_000,
        &["(0)H+(9)H=(9)H", "(0)H+(6)H=(6)H", "(9)H+(0)H=(9)H"],
        45,
        203,
    ),
    handwritten(MoveCount::One, "2*3=(9)H", 10_000, &["3*3=(9)H", "2*3=(6)H"], 14, 82),
    handwritten(MoveCount::One, "(1)H+(4)H=5", 10_000, &[], 28, 204),
];

pub const HANDWRITTEN_TWO_STICK: &[Puzzle] = &[
    handwritten(MoveCount::Two, "2*3=(9)H", 10_000, &["2*5=(1)H(0)H"], 93, 5_317),
    handwritten(
        MoveCount::Two,
        "(1)H+(4)H=5",
        100_000,
        &[
            "(4)H+(1)H=5",
            "-(4)H=(1)H-5",
            "-(1)H=(4)H-5",
            "(7)H-(4)H=3",
            "(1)H-(4)H=-3",
        ],
        221,
        40_268,
    ),
];

/// Every fixture group, for exhaustive checks.
pub const ALL: &[&[Puzzle]] = &[
    STANDARD_ONE_STICK,
    STANDARD_TWO_STICK,
    HANDWRITTEN_ONE_STICK,
    HANDWRITTEN_TWO_STICK,
];
