//! Outcome of a solve call.

use serde::Serialize;

use crate::statistics::SolveStatistics;

/// Solutions and near-misses found for one equation.
///
/// Both lists hold normalized equation strings (blanks removed), unique and
/// in first-seen generation order.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    /// The input equation, normalized.
    pub equation: String,
    /// True equations reachable by the configured move, excluding the input.
    pub solutions: Vec<String>,
    /// Well-formed candidates that are not true.
    pub others: Vec<String>,
    /// Candidates generated, capped by the mutation budget.
    pub total_mutations: usize,
    pub statistics: SolveStatistics,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}
