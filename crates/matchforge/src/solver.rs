//! One-call entry points over the built-in display modes.

use tracing::debug;

use matchforge_config::SolverConfig;
use matchforge_core::{RuleRegistry, Result};
use matchforge_solver::{SolveResult, Solver};

/// Solves `equation` with the built-in `standard` and `handwritten` modes.
///
/// `config.mode` picks the rule set.
///
/// # Errors
///
/// Fails on an unknown mode, an invalid configuration or an unreadable
/// equation.
pub fn solve(equation: &str, config: &SolverConfig) -> Result<SolveResult> {
    solve_with(&RuleRegistry::builtin(), equation, config)
}

/// Like [`solve`], with a caller-supplied registry.
pub fn solve_with(
    registry: &RuleRegistry,
    equation: &str,
    config: &SolverConfig,
) -> Result<SolveResult> {
    #[cfg(feature = "console")]
    matchforge_console::init();

    debug!(mode = %config.mode, "Building solver");
    let solver = Solver::from_registry(registry, config.clone())?;
    solver.solve(equation)
}

/// Structural validity and truth of `equation` as written.
///
/// Returns `(valid, true)`. The mode does not matter here; both modes read
/// the same arithmetic.
pub fn check(equation: &str) -> Result<(bool, bool)> {
    let solver = Solver::from_active_mode(&RuleRegistry::builtin(), SolverConfig::default())?;
    solver.check(equation)
}
