//! Equation scoring for MatchForge.
//!
//! A candidate equation is scored in two passes:
//! - structural validation of its arithmetic text (one `=`, no leading
//!   zeros, no doubled or trailing operators)
//! - numeric comparison of both sides, parsed by a small recursive-descent
//!   parser rather than evaluated as code

pub mod error;
pub mod evaluator;
pub mod parser;
pub mod validity;

#[cfg(test)]
mod tests;

pub use error::EvalError;
pub use evaluator::{Evaluator, DEFAULT_EPSILON};
pub use parser::evaluate_side;
pub use validity::{
    arithmetic_text, check_structure, has_doubled_operators, has_leading_zero, is_plausible,
    is_valid_expression,
};
