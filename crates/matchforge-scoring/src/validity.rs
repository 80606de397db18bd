//! Structural checks on the arithmetic text of an equation.
//!
//! The arithmetic text drops blanks and reads handwritten glyphs as plain
//! digits, so `(1)H(1)H=11` is checked as `11=11`.

use matchforge_core::Symbol;

use crate::error::EvalError;

const OPERATORS: &[char] = &['+', '-', '*', '/'];

/// Renders `tokens` as arithmetic text.
pub fn arithmetic_text(tokens: &[Symbol]) -> String {
    tokens.iter().map(|s| s.arithmetic_str()).collect()
}

/// Splits at the single `=`; both sides must be non-empty.
pub(crate) fn split_sides(text: &str) -> Result<(&str, &str), EvalError> {
    let mut parts = text.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) if !left.is_empty() && !right.is_empty() => {
            Ok((left, right))
        }
        _ => Err(EvalError::Sides),
    }
}

/// True when two of `+ - * / =` are adjacent.
///
/// The only allowed pair is `=` followed by a sign, as in `3=-1-2`. A sign
/// that opens the expression has no left neighbour, but still pairs with an
/// operator after it, so `-+1=-1` and `1=-*2` are doubled.
pub fn has_doubled_operators(text: &str) -> bool {
    let is_operator = |c: char| c == '=' || OPERATORS.contains(&c);
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).any(|pair| match (pair[0], pair[1]) {
        ('=', '+' | '-') => false,
        (a, b) => is_operator(a) && is_operator(b),
    })
}

/// True when a multi-digit number starts with `0`.
pub fn has_leading_zero(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len().saturating_sub(1)).any(|i| {
        chars[i] == '0'
            && chars[i + 1].is_ascii_digit()
            && (i == 0 || !chars[i - 1].is_ascii_digit())
    })
}

fn ends_with_operator(text: &str) -> bool {
    text.ends_with(OPERATORS)
}

/// Full structural validation of arithmetic text.
pub fn check_structure(text: &str) -> Result<(&str, &str), EvalError> {
    let (left, right) = split_sides(text)?;
    if has_leading_zero(text) {
        return Err(EvalError::LeadingZero);
    }
    if has_doubled_operators(text) {
        return Err(EvalError::DoubledOperator);
    }
    if ends_with_operator(left) || ends_with_operator(right) {
        return Err(EvalError::TrailingOperator);
    }
    Ok((left, right))
}

/// Structural validity: one `=`, both sides non-empty, no leading zeros,
/// no doubled operators, no trailing operator.
pub fn is_valid_expression(tokens: &[Symbol]) -> bool {
    check_structure(&arithmetic_text(tokens)).is_ok()
}

/// The solver's cheap pre-filter, run before full evaluation.
///
/// Looser than [`is_valid_expression`]: leading zeros pass, and only the end
/// of the whole equation is checked for a dangling operator.
pub fn is_plausible(tokens: &[Symbol]) -> bool {
    let text = arithmetic_text(tokens);
    split_sides(&text).is_ok() && !has_doubled_operators(&text) && !ends_with_operator(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubled_operators() {
        assert!(has_doubled_operators("1++1=2"));
        assert!(has_doubled_operators("1+*1=2"));
        assert!(has_doubled_operators("3+-2=1"));
        assert!(has_doubled_operators("1==1"));
        assert!(!has_doubled_operators("-1+1=0"));
        assert!(!has_doubled_operators("3=+5-2"));
        assert!(!has_doubled_operators("5-7=-2"));
        assert!(has_doubled_operators("-+-1=1"));
    }

    #[test]
    fn test_sign_then_operator_is_doubled() {
        assert!(has_doubled_operators("-+1=1"));
        assert!(has_doubled_operators("1=-*2"));
        assert!(has_doubled_operators("-*1=1"));
        assert!(has_doubled_operators("3=+/1"));
        assert!(has_doubled_operators("1=--1"));
        assert_eq!(check_structure("-+1=-1"), Err(EvalError::DoubledOperator));
        assert_eq!(check_structure("1=-*2"), Err(EvalError::DoubledOperator));
        assert_eq!(check_structure("-1=-1"), Ok(("-1", "-1")));
    }

    #[test]
    fn test_leading_zero() {
        assert!(has_leading_zero("09+1=10"));
        assert!(has_leading_zero("1+01=2"));
        assert!(!has_leading_zero("0+1=1"));
        assert!(!has_leading_zero("10+0=10"));
        assert!(!has_leading_zero("100=100"));
    }

    #[test]
    fn test_structure() {
        assert_eq!(check_structure("1+1=2"), Ok(("1+1", "2")));
        assert_eq!(check_structure("1+1"), Err(EvalError::Sides));
        assert_eq!(check_structure("=2"), Err(EvalError::Sides));
        assert_eq!(check_structure("1=1=1"), Err(EvalError::Sides));
        assert_eq!(check_structure("09+1=10"), Err(EvalError::LeadingZero));
        assert_eq!(check_structure("1=1-"), Err(EvalError::TrailingOperator));
        assert_eq!(check_structure("-=1"), Err(EvalError::TrailingOperator));
    }

    #[test]
    fn test_plausible_is_looser_than_valid() {
        use matchforge_core::tokenize;

        let seq = tokenize("-=1").unwrap();
        assert!(is_plausible(&seq));
        assert!(!is_valid_expression(&seq));

        let seq = tokenize("1=1-").unwrap();
        assert!(!is_plausible(&seq));
    }

    #[test]
    fn test_handwritten_read_as_digits() {
        use matchforge_core::tokenize;

        let seq = tokenize("(1)H(1)H=11").unwrap();
        assert_eq!(arithmetic_text(&seq), "11=11");
        let seq = tokenize("(0)H(9)H=9").unwrap();
        assert!(!is_valid_expression(&seq));
    }
}
