//! Reasons an equation fails to evaluate.

use thiserror::Error;

/// Why a candidate equation is not a valid equality.
///
/// These never escape [`Evaluator::evaluate`](crate::Evaluator::evaluate),
/// which reports every failure as "not valid".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("expected exactly one '=' with a non-empty expression on each side")]
    Sides,

    #[error("number with a leading zero")]
    LeadingZero,

    #[error("adjacent operators")]
    DoubledOperator,

    #[error("expression ends with an operator")]
    TrailingOperator,

    #[error("unexpected '{ch}' at offset {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("repeated sign at offset {position}")]
    RepeatedSign { position: usize },

    #[error("division by zero")]
    DivisionByZero,
}
