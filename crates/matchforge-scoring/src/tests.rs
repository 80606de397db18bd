use matchforge_core::tokenize;

use crate::{EvalError, Evaluator};

fn eval(text: &str) -> bool {
    Evaluator::default().evaluate(&tokenize(text).unwrap())
}

fn valid(text: &str) -> bool {
    Evaluator::default().is_valid_expression(&tokenize(text).unwrap())
}

#[test]
fn test_structural_validity() {
    assert!(!valid("09+1=10"));
    assert!(valid("0+1=1"));
    assert!(!valid("1++1=2"));
    assert!(!valid("1+*1=2"));
    assert!(valid("-1+1=0"));
    assert!(valid("3=+5-2"));
    assert!(!valid("3+-2=1"));
}

#[test]
fn test_true_equations() {
    assert!(eval("8+3-11=0"));
    assert!(eval("9+3-4=8"));
    assert!(eval("6/3=2"));
    assert!(eval("5-7=-2"));
    assert!(eval("3=+5-2"));
    assert!(eval("-41+23=-18"));
    assert!(eval("2*5=(1)H(0)H"));
    assert!(eval("(0)H+(9)H=(9)H"));
}

#[test]
fn test_false_equations() {
    assert!(!eval("8+3-4=0"));
    assert!(!eval("1+1=11"));
    assert!(!eval("7=7="));
    assert!(!eval("-+1=-1"));
    assert!(!eval("1/0=1"));
    assert!(!eval("0/0=0"));
}

#[test]
fn test_repeated_sign_after_equals() {
    let evaluator = Evaluator::default();
    let seq = tokenize("1=--1").unwrap();
    assert!(evaluator.is_valid_expression(&seq));
    assert_eq!(
        evaluator.try_evaluate(&seq),
        Err(EvalError::RepeatedSign { position: 0 })
    );
    assert!(!evaluator.evaluate(&seq));
}

#[test]
fn test_epsilon_is_configurable() {
    let seq = tokenize("10/3=3").unwrap();
    assert!(!Evaluator::default().evaluate(&seq));
    assert!(Evaluator::new(0.5).evaluate(&seq));
}

#[test]
fn test_evaluate_is_deterministic() {
    let evaluator = Evaluator::default();
    for text in ["6+5=11", "6-5=17", "(4)H+(1)H=5", "1111=4"] {
        let seq = tokenize(text).unwrap();
        let first = evaluator.evaluate(&seq);
        for _ in 0..3 {
            assert_eq!(evaluator.evaluate(&seq), first);
        }
    }
}
