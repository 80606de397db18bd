//! Decides whether a token sequence is a true equation.

use matchforge_core::Symbol;

use crate::error::EvalError;
use crate::parser::evaluate_side;
use crate::validity::{arithmetic_text, check_structure};

/// Tolerance used when comparing the two sides.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Checks structure, then compares both sides numerically.
///
/// # Example
///
/// ```
/// use matchforge_core::tokenize;
/// use matchforge_scoring::Evaluator;
///
/// let evaluator = Evaluator::default();
/// assert!(evaluator.evaluate(&tokenize("9-7=2").unwrap()));
/// assert!(!evaluator.evaluate(&tokenize("5+7=2").unwrap()));
/// assert!(!evaluator.evaluate(&tokenize("1/0=1").unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluator {
    epsilon: f64,
}

impl Evaluator {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// True when `tokens` is structurally valid and both sides agree.
    pub fn evaluate(&self, tokens: &[Symbol]) -> bool {
        self.try_evaluate(tokens).unwrap_or(false)
    }

    /// Like [`evaluate`](Self::evaluate), but reports why evaluation failed.
    pub fn try_evaluate(&self, tokens: &[Symbol]) -> Result<bool, EvalError> {
        let text = arithmetic_text(tokens);
        let (left, right) = check_structure(&text)?;
        let left = evaluate_side(left)?;
        let right = evaluate_side(right)?;
        Ok((left - right).abs() < self.epsilon)
    }

    /// Structural validity only; see [`crate::is_valid_expression`].
    pub fn is_valid_expression(&self, tokens: &[Symbol]) -> bool {
        crate::validity::is_valid_expression(tokens)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}
