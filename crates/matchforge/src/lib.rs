//! MatchForge - A Matchstick Equation Solver in Rust
//!
//! Given an equation drawn in matchsticks, find every true equation reachable
//! by moving one or two sticks.
//!
//! # Example
//!
//! ```rust
//! use matchforge::prelude::*;
//!
//! let result = matchforge::solve("6-5=17", &SolverConfig::default()).unwrap();
//! assert_eq!(result.solutions, vec!["6+5=11"]);
//! ```

// Vocabulary
pub use matchforge_core::{
    canonicalize, handwritten_rules, normalize, standard_rules, tokenize, tokenize_variants,
    MatchForgeError, Result, RuleRegistry, RuleSet, RuleSetBuilder, StickCount, Symbol,
    TokenSequence,
};

// Evaluation
pub use matchforge_scoring::{is_plausible, is_valid_expression, EvalError, Evaluator};

// Configuration
pub use matchforge_config::{
    ConfigError, MoveCount, MoveThreadCount, SolverConfig, TerminationConfig,
};

// Solving
pub use matchforge_solver::{
    SolveResult, SolveStatistics, Solver, SolverEventListener, StrategyStatistics,
};

mod solver;
pub use solver::{check, solve, solve_with};

#[cfg(feature = "console")]
pub use matchforge_console as console;

pub mod prelude {
    pub use super::{MoveCount, RuleRegistry, SolveResult, Solver, SolverConfig, Symbol};
}
