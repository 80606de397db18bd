//! End-to-end solver tests against the shared puzzle fixtures.

use std::collections::HashSet;
use std::sync::Arc;

use matchforge_config::{MoveThreadCount, SolverConfig};
use matchforge_core::{MatchForgeError, RuleRegistry};
use matchforge_test::puzzles::{self, Puzzle};

use crate::{Solver, SolveResult};

fn solve(puzzle: &Puzzle) -> SolveResult {
    let registry = RuleRegistry::builtin();
    let solver = Solver::from_registry(&registry, puzzle.config()).unwrap();
    solver.solve(puzzle.equation).unwrap()
}

fn assert_matches(puzzle: &Puzzle) {
    let result = solve(puzzle);
    assert_eq!(result.solutions, puzzle.solutions, "{}", puzzle.equation);
    assert_eq!(result.others.len(), puzzle.others, "{}", puzzle.equation);
    assert_eq!(result.total_mutations, puzzle.total_mutations, "{}", puzzle.equation);
    assert_eq!(
        result.statistics.terminated_early,
        puzzle.is_truncated(),
        "{}",
        puzzle.equation
    );
}

#[test]
fn test_standard_one_stick() {
    for puzzle in puzzles::STANDARD_ONE_STICK {
        assert_matches(puzzle);
    }
}

#[test]
fn test_standard_two_stick() {
    for puzzle in puzzles::STANDARD_TWO_STICK {
        assert_matches(puzzle);
    }
}

#[test]
fn test_handwritten_one_stick() {
    for puzzle in puzzles::HANDWRITTEN_ONE_STICK {
        assert_matches(puzzle);
    }
}

#[test]
fn test_handwritten_two_stick() {
    for puzzle in puzzles::HANDWRITTEN_TWO_STICK {
        assert_matches(puzzle);
    }
}

#[test]
fn test_budget_truncates_search() {
    assert_matches(&puzzles::STANDARD_TRUNCATED);
}

#[test]
fn test_two_stick_excludes_one_stick_answers() {
    let result = solve(&puzzles::STANDARD_TWO_STICK[1]);
    assert!(result.solutions.iter().any(|s| s == "47+28=75"));
    assert!(!result.solutions.iter().any(|s| s == "47+29=76"));
}

#[test]
fn test_results_are_unique_and_exclude_original() {
    for group in puzzles::ALL {
        for puzzle in *group {
            let result = solve(puzzle);
            let solutions: HashSet<_> = result.solutions.iter().collect();
            let others: HashSet<_> = result.others.iter().collect();
            assert_eq!(solutions.len(), result.solutions.len());
            assert_eq!(others.len(), result.others.len());
            assert!(!result.solutions.contains(&result.equation));
        }
    }
}

#[test]
fn test_already_true_equation_is_not_its_own_solution() {
    let solver = Solver::new(
        Arc::new(matchforge_core::standard_rules()),
        SolverConfig::default(),
    )
    .unwrap();
    let result = solver.solve("9/3=3").unwrap();
    assert!(result.solutions.iter().all(|s| s != "9/3=3"));
    assert_eq!(solver.check("9/3=3").unwrap(), (true, true));
    assert_eq!(solver.check("09/3=3").unwrap(), (false, false));
}

#[test]
fn test_sign_before_operator_is_never_true() {
    let solver = Solver::from_registry(&RuleRegistry::builtin(), SolverConfig::default()).unwrap();
    assert_eq!(solver.check("-+1=-1").unwrap(), (false, false));
    assert_eq!(solver.check("1=-*2").unwrap(), (false, false));
    assert_eq!(solver.check("-1=-1").unwrap(), (true, true));
}

#[test]
fn test_active_mode_drives_solver() {
    let mut registry = RuleRegistry::builtin();
    registry.switch_mode("handwritten").unwrap();

    let solver = Solver::from_active_mode(&registry, SolverConfig::default()).unwrap();
    assert_eq!(solver.config().mode, "handwritten");

    let puzzle = &puzzles::HANDWRITTEN_ONE_STICK[2];
    let result = solver.solve(puzzle.equation).unwrap();
    assert_eq!(result.solutions, puzzle.solutions);

    assert!(matches!(
        Solver::from_active_mode(&RuleRegistry::new(), SolverConfig::default()),
        Err(MatchForgeError::Config(_))
    ));
}

#[test]
fn test_parallel_evaluation_preserves_order() {
    let puzzle = &puzzles::STANDARD_TWO_STICK[0];
    let sequential = solve(puzzle);

    for threads in [MoveThreadCount::Auto, MoveThreadCount::Count(3)] {
        let config = puzzle.config().with_move_thread_count(threads);
        let registry = RuleRegistry::builtin();
        let solver = Solver::from_registry(&registry, config).unwrap();
        let parallel = solver.solve(puzzle.equation).unwrap();

        assert_eq!(parallel.solutions, sequential.solutions);
        assert_eq!(parallel.others, sequential.others);
        assert_eq!(
            parallel.statistics.evaluated_count,
            sequential.statistics.evaluated_count
        );
    }
}

#[test]
fn test_statistics() {
    let result = solve(&puzzles::STANDARD_ONE_STICK[4]);
    let stats = &result.statistics;

    assert_eq!(stats.variant_count, 1);
    assert_eq!(stats.mutations_generated, 63);
    assert_eq!(stats.evaluated_count, stats.plausible_count);
    assert!(stats.plausible_count >= (result.solutions.len() + result.others.len()) as u64);
    let names: Vec<_> = stats.strategies.iter().map(|s| s.strategy).collect();
    assert_eq!(names, vec!["transform", "relocate", "merge"]);
    let counts: Vec<_> = stats.strategies.iter().map(|s| s.mutations).collect();
    assert_eq!(counts, vec![7, 56, 0]);
}

#[test]
fn test_unknown_glyph_is_an_error() {
    let solver = Solver::new(
        Arc::new(matchforge_core::standard_rules()),
        SolverConfig::default(),
    )
    .unwrap();
    assert_eq!(
        solver.solve("2?3=5").unwrap_err(),
        MatchForgeError::UnknownGlyph {
            glyph: '?',
            position: 1
        }
    );
}

#[test]
fn test_unknown_mode_is_an_error() {
    let registry = RuleRegistry::builtin();
    let config = SolverConfig::new().with_mode("roman");
    assert!(matches!(
        Solver::from_registry(&registry, config),
        Err(MatchForgeError::UnknownMode(_))
    ));
}

#[test]
fn test_invalid_config_is_rejected() {
    let rules = Arc::new(matchforge_core::standard_rules());
    let config = SolverConfig::new().with_max_mutations(0);
    assert!(matches!(
        Solver::new(rules, config),
        Err(MatchForgeError::Config(_))
    ));
}

#[test]
fn test_result_serializes() {
    let puzzle = &puzzles::STANDARD_ONE_STICK[1];
    let result = solve(puzzle);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["equation"], "6-5=17");
    assert_eq!(json["solutions"][0], "6+5=11");
    assert_eq!(json["total_mutations"], 110);
    assert_eq!(json["statistics"]["mutations_generated"], 110);
}
