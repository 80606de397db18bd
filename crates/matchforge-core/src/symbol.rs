//! The closed alphabet of matchstick glyphs.

use std::fmt;

/// An atomic glyph of a matchstick equation.
///
/// Digits come in three families: the standard seven-segment digits, the
/// two-stick standard "eleven" glyph, and the handwritten glyphs written as
/// `(d)H` in equation strings. `Blank` never appears in a rendered equation;
/// it marks a site where a stick could be laid down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Symbol {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    /// Standard `11`: two vertical sticks read as one glyph.
    Eleven,
    HandZero,
    HandOne,
    HandFour,
    HandSix,
    HandSeven,
    HandNine,
    HandEleven,
    Plus,
    Minus,
    Times,
    Divide,
    Equals,
    Blank,
}

impl Symbol {
    /// Number of distinct symbols.
    pub const COUNT: usize = 24;

    /// Every symbol, in index order.
    pub const ALL: [Symbol; Symbol::COUNT] = [
        Symbol::Zero,
        Symbol::One,
        Symbol::Two,
        Symbol::Three,
        Symbol::Four,
        Symbol::Five,
        Symbol::Six,
        Symbol::Seven,
        Symbol::Eight,
        Symbol::Nine,
        Symbol::Eleven,
        Symbol::HandZero,
        Symbol::HandOne,
        Symbol::HandFour,
        Symbol::HandSix,
        Symbol::HandSeven,
        Symbol::HandNine,
        Symbol::HandEleven,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Times,
        Symbol::Divide,
        Symbol::Equals,
        Symbol::Blank,
    ];

    /// Dense index usable for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The glyph as written in equation strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::Zero => "0",
            Symbol::One => "1",
            Symbol::Two => "2",
            Symbol::Three => "3",
            Symbol::Four => "4",
            Symbol::Five => "5",
            Symbol::Six => "6",
            Symbol::Seven => "7",
            Symbol::Eight => "8",
            Symbol::Nine => "9",
            Symbol::Eleven => "11",
            Symbol::HandZero => "(0)H",
            Symbol::HandOne => "(1)H",
            Symbol::HandFour => "(4)H",
            Symbol::HandSix => "(6)H",
            Symbol::HandSeven => "(7)H",
            Symbol::HandNine => "(9)H",
            Symbol::HandEleven => "(11)H",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Times => "*",
            Symbol::Divide => "/",
            Symbol::Equals => "=",
            Symbol::Blank => " ",
        }
    }

    /// The text this symbol contributes to an arithmetic expression.
    ///
    /// Handwritten glyphs read as their plain digits; blanks contribute nothing.
    pub const fn arithmetic_str(self) -> &'static str {
        match self {
            Symbol::HandZero => "0",
            Symbol::HandOne => "1",
            Symbol::HandFour => "4",
            Symbol::HandSix => "6",
            Symbol::HandSeven => "7",
            Symbol::HandNine => "9",
            Symbol::HandEleven => "11",
            Symbol::Blank => "",
            other => other.as_str(),
        }
    }

    /// Parses a complete glyph string such as `"7"`, `"11"` or `"(6)H"`.
    ///
    /// Alternative multiplication and division glyphs (`x`, `×`, `÷`) map to
    /// their canonical operators.
    pub fn from_glyph(glyph: &str) -> Option<Symbol> {
        let symbol = match glyph {
            "11" => Symbol::Eleven,
            "(0)H" => Symbol::HandZero,
            "(1)H" => Symbol::HandOne,
            "(4)H" => Symbol::HandFour,
            "(6)H" => Symbol::HandSix,
            "(7)H" => Symbol::HandSeven,
            "(9)H" => Symbol::HandNine,
            "(11)H" => Symbol::HandEleven,
            _ => {
                let mut chars = glyph.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                return Symbol::from_char(c);
            }
        };
        Some(symbol)
    }

    /// Parses a single-character glyph.
    pub fn from_char(c: char) -> Option<Symbol> {
        let symbol = match c {
            '0' => Symbol::Zero,
            '1' => Symbol::One,
            '2' => Symbol::Two,
            '3' => Symbol::Three,
            '4' => Symbol::Four,
            '5' => Symbol::Five,
            '6' => Symbol::Six,
            '7' => Symbol::Seven,
            '8' => Symbol::Eight,
            '9' => Symbol::Nine,
            '+' => Symbol::Plus,
            '-' => Symbol::Minus,
            '*' | 'x' | '×' => Symbol::Times,
            '/' | '÷' => Symbol::Divide,
            '=' => Symbol::Equals,
            ' ' => Symbol::Blank,
            _ => return None,
        };
        Some(symbol)
    }

    #[inline]
    pub const fn is_blank(self) -> bool {
        matches!(self, Symbol::Blank)
    }

    /// True for `+ - * /` (not `=`).
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Symbol::Plus | Symbol::Minus | Symbol::Times | Symbol::Divide
        )
    }

    /// True for the handwritten `(d)H` glyphs.
    #[inline]
    pub const fn is_handwritten(self) -> bool {
        matches!(
            self,
            Symbol::HandZero
                | Symbol::HandOne
                | Symbol::HandFour
                | Symbol::HandSix
                | Symbol::HandSeven
                | Symbol::HandNine
                | Symbol::HandEleven
        )
    }

    /// True for every digit glyph, plain, standard-eleven or handwritten.
    #[inline]
    pub const fn is_digit(self) -> bool {
        (self as u8) <= (Symbol::HandEleven as u8)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn test_glyph_round_trip() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_glyph(symbol.as_str()), Some(symbol));
        }
    }

    #[test]
    fn test_alternative_operator_glyphs() {
        assert_eq!(Symbol::from_char('x'), Some(Symbol::Times));
        assert_eq!(Symbol::from_char('×'), Some(Symbol::Times));
        assert_eq!(Symbol::from_char('÷'), Some(Symbol::Divide));
        assert_eq!(Symbol::from_char('?'), None);
        assert_eq!(Symbol::from_glyph("(5)H"), None);
    }

    #[test]
    fn test_classification() {
        assert!(Symbol::HandEleven.is_digit());
        assert!(Symbol::Eleven.is_digit());
        assert!(!Symbol::Plus.is_digit());
        assert!(Symbol::Divide.is_operator());
        assert!(!Symbol::Equals.is_operator());
        assert!(Symbol::HandSix.is_handwritten());
        assert!(!Symbol::Six.is_handwritten());
        assert_eq!(Symbol::HandEleven.arithmetic_str(), "11");
        assert_eq!(Symbol::Blank.arithmetic_str(), "");
    }
}
