//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        mode = "handwritten"
        move_count = 2
        max_mutations = 100000
        epsilon = 0.001
        move_thread_count = { count = 4 }

        [termination]
        seconds_spent_limit = 2
        millis_spent_limit = 500
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.mode, "handwritten");
    assert_eq!(config.move_count, MoveCount::Two);
    assert_eq!(config.max_mutations, 100_000);
    assert_eq!(config.epsilon, 0.001);
    assert_eq!(config.move_thread_count, MoveThreadCount::Count(4));
    assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        mode: standard
        move_count: 1
        move_thread_count: auto
        termination:
          millis_spent_limit: 100
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.move_count, MoveCount::One);
    assert_eq!(config.move_thread_count, MoveThreadCount::Auto);
    assert_eq!(config.max_mutations, 10_000);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(100)));
}

#[test]
fn test_empty_input_gives_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.mode, "standard");
    assert_eq!(config.epsilon, 1e-4);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_unsupported_move_count() {
    assert!(SolverConfig::from_toml_str("move_count = 3").is_err());
    assert!(SolverConfig::from_yaml_str("move_count: 0").is_err());
    assert!(matches!(MoveCount::try_from(3), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validation() {
    assert!(matches!(
        SolverConfig::from_toml_str("max_mutations = 0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        SolverConfig::from_toml_str("epsilon = -1.0"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        SolverConfig::from_toml_str("mode = \"\""),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_mode("handwritten")
        .with_move_count(MoveCount::Two)
        .with_max_mutations(500)
        .with_time_limit(Duration::from_millis(40))
        .with_move_thread_count(MoveThreadCount::Auto);

    assert_eq!(config.mode, "handwritten");
    assert_eq!(config.move_count.get(), 2);
    assert_eq!(config.max_mutations, 500);
    assert_eq!(config.time_limit(), Some(Duration::from_millis(40)));
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file() {
    let err = SolverConfig::load("/nonexistent/matchforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
