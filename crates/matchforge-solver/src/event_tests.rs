//! Tests for the event system.

use super::*;
use crate::Solver;
use matchforge_config::SolverConfig;
use matchforge_core::standard_rules;

#[test]
fn test_event_support_new() {
    let support = SolverEventSupport::new();
    assert_eq!(support.listener_count(), 0);
    assert!(!support.has_listeners());
}

#[test]
fn test_event_support_add_and_clear() {
    let mut support = SolverEventSupport::new();
    support.add_listener(Arc::new(CountingEventListener::new()));
    support.add_listener(Arc::new(CountingEventListener::new()));
    assert_eq!(support.listener_count(), 2);

    support.clear_listeners();
    assert!(!support.has_listeners());
}

#[test]
fn test_solver_fires_events() {
    let listener = Arc::new(CountingEventListener::new());
    let solver = Solver::new(Arc::new(standard_rules()), SolverConfig::default())
        .unwrap()
        .with_listener(listener.clone());

    solver.solve("1111=4").unwrap();

    assert_eq!(listener.started_count(), 1);
    assert_eq!(listener.variant_count(), 2);
    assert_eq!(listener.ended_count(), 1);
    assert_eq!(listener.last_mutations(), 45);
}

#[test]
fn test_variant_events_stop_at_budget() {
    let listener = Arc::new(CountingEventListener::new());
    let config = SolverConfig::default().with_max_mutations(5);
    let solver = Solver::new(Arc::new(standard_rules()), config)
        .unwrap()
        .with_listener(listener.clone());

    let result = solver.solve("1111=4").unwrap();

    assert_eq!(result.total_mutations, 5);
    assert_eq!(listener.variant_count(), 1);
    assert_eq!(listener.last_mutations(), 5);
}

#[test]
fn test_unreadable_equation_fires_no_events() {
    let listener = Arc::new(CountingEventListener::new());
    let solver = Solver::new(Arc::new(standard_rules()), SolverConfig::default())
        .unwrap()
        .with_listener(listener.clone());

    assert!(solver.solve("2&3=5").is_err());

    assert_eq!(listener.started_count(), 0);
    assert_eq!(listener.ended_count(), 0);
}
