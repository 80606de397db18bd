//! Splitting equation text into symbols.
//!
//! Multi-character glyphs (`11`, `(d)H`, `(11)H`) make tokenization
//! ambiguous: `111` may be read as `11 1` or `1 11`. [`tokenize`] always takes
//! the greedy reading; [`tokenize_variants`] adds a second reading when a run
//! of ones allows one.

use crate::error::{MatchForgeError, Result};
use crate::sequence::TokenSequence;
use crate::symbol::Symbol;

const HAND_ELEVEN: [char; 5] = ['(', '1', '1', ')', 'H'];

/// Normalizes user input at the boundary: lowercase `h` becomes `H`.
pub fn canonicalize(input: &str) -> String {
    input.replace('h', "H")
}

/// Greedy tokenization.
///
/// A lone `1` stays `One`; only a pair of adjacent ones reads as `Eleven`.
///
/// # Example
///
/// ```
/// use matchforge_core::{tokenize, Symbol};
///
/// let seq = tokenize("(6)H+11=17").unwrap();
/// assert_eq!(
///     seq.symbols(),
///     &[Symbol::HandSix, Symbol::Plus, Symbol::Eleven, Symbol::Equals, Symbol::One, Symbol::Seven]
/// );
/// ```
pub fn tokenize(equation: &str) -> Result<TokenSequence> {
    let chars: Vec<char> = equation.chars().collect();
    let mut out = TokenSequence::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i..].starts_with(&HAND_ELEVEN) {
            out.push(Symbol::HandEleven);
            i += HAND_ELEVEN.len();
        } else if chars[i] == '1' && chars.get(i + 1) == Some(&'1') {
            out.push(Symbol::Eleven);
            i += 2;
        } else if let Some(symbol) = handwritten_at(&chars, i)? {
            out.push(symbol);
            i += 4;
        } else {
            out.push(single_at(&chars, i)?);
            i += 1;
        }
    }

    Ok(out)
}

/// All readings of `equation`, greedy first.
///
/// At most two readings are produced. The second splits a run of ones so that
/// a lone `1` is emitted whenever at least two more ones follow; it is only
/// returned when it differs from the greedy reading.
pub fn tokenize_variants(equation: &str) -> Result<Vec<TokenSequence>> {
    let greedy = tokenize(equation)?;
    if !equation.contains("11") {
        return Ok(vec![greedy]);
    }

    let chars: Vec<char> = equation.chars().collect();
    let mut alternative = TokenSequence::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i..].starts_with(&HAND_ELEVEN) {
            alternative.push(Symbol::HandEleven);
            i += HAND_ELEVEN.len();
        } else if let Some(symbol) = handwritten_at(&chars, i)? {
            alternative.push(symbol);
            i += 4;
        } else if chars[i] == '1' && chars.get(i + 1) == Some(&'1') {
            if chars.get(i + 2) == Some(&'1') {
                alternative.push(Symbol::One);
                i += 1;
            } else {
                alternative.push(Symbol::Eleven);
                i += 2;
            }
        } else {
            alternative.push(single_at(&chars, i)?);
            i += 1;
        }
    }

    if alternative == greedy {
        Ok(vec![greedy])
    } else {
        Ok(vec![greedy, alternative])
    }
}

/// Reads a `(d)H` glyph starting at `i`, if the brackets line up.
fn handwritten_at(chars: &[char], i: usize) -> Result<Option<Symbol>> {
    if chars[i] != '(' || i + 3 >= chars.len() || chars[i + 2] != ')' || chars[i + 3] != 'H' {
        return Ok(None);
    }
    let glyph: String = chars[i..i + 4].iter().collect();
    Symbol::from_glyph(&glyph)
        .map(Some)
        .ok_or(MatchForgeError::UnknownGlyph {
            glyph: chars[i + 1],
            position: i + 1,
        })
}

fn single_at(chars: &[char], i: usize) -> Result<Symbol> {
    Symbol::from_char(chars[i]).ok_or(MatchForgeError::UnknownGlyph {
        glyph: chars[i],
        position: i,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::*;

    #[test]
    fn test_greedy_prefers_eleven() {
        let seq = tokenize("111").unwrap();
        assert_eq!(seq.symbols(), &[Eleven, One]);
    }

    #[test]
    fn test_lone_one_before_other_digit() {
        let seq = tokenize("(6)H+11=17").unwrap();
        assert_eq!(
            seq.symbols(),
            &[HandSix, Plus, Eleven, Equals, One, Seven]
        );
    }

    #[test]
    fn test_handwritten_glyphs_are_atomic() {
        let seq = tokenize("(0)H+(6)H=(9)H").unwrap();
        assert_eq!(seq.symbols(), &[HandZero, Plus, HandSix, Equals, HandNine]);

        let seq = tokenize("(11)H-(1)H").unwrap();
        assert_eq!(seq.symbols(), &[HandEleven, Minus, HandOne]);
    }

    #[test]
    fn test_variants_for_run_of_ones() {
        let variants = tokenize_variants("1111=4").unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].symbols(), &[Eleven, Eleven, Equals, Four]);
        assert_eq!(variants[1].symbols(), &[One, One, Eleven, Equals, Four]);

        let variants = tokenize_variants("111").unwrap();
        assert_eq!(variants[1].symbols(), &[One, Eleven]);
    }

    #[test]
    fn test_single_variant_when_readings_agree() {
        assert_eq!(tokenize_variants("1+1=11").unwrap().len(), 1);
        assert_eq!(tokenize_variants("8+3-4=0").unwrap().len(), 1);
        assert_eq!(tokenize_variants("(11)H=11").unwrap().len(), 1);
    }

    #[test]
    fn test_alternative_operator_glyphs() {
        let seq = tokenize("3x3=9").unwrap();
        assert_eq!(seq.symbols(), &[Three, Times, Three, Equals, Nine]);
        let seq = tokenize("8÷2=4").unwrap();
        assert_eq!(seq.symbols(), &[Eight, Divide, Two, Equals, Four]);
    }

    #[test]
    fn test_unknown_glyph_reports_position() {
        assert_eq!(
            tokenize("2&3=5"),
            Err(MatchForgeError::UnknownGlyph {
                glyph: '&',
                position: 1
            })
        );
        assert_eq!(
            tokenize("(5)H=5"),
            Err(MatchForgeError::UnknownGlyph {
                glyph: '5',
                position: 1
            })
        );
    }

    #[test]
    fn test_canonicalize_uppercases_h() {
        assert_eq!(canonicalize("(0)h+(6)h=(9)h"), "(0)H+(6)H=(9)H");
    }
}
