//! Recursive-descent evaluation of one side of an equation.
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-') factor | number
//! ```

use crate::error::EvalError;

/// Evaluates arithmetic text made of digits and `+ - * /`.
pub fn evaluate_side(text: &str) -> Result<f64, EvalError> {
    let mut parser = Parser {
        chars: text.chars().collect(),
        pos: 0,
    };
    let value = parser.expr()?;
    match parser.peek() {
        None => Ok(value),
        Some(ch) => Err(EvalError::UnexpectedChar {
            ch,
            position: parser.pos,
        }),
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            if op == '+' {
                value += rhs;
            } else {
                value -= rhs;
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.factor()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            if op == '*' {
                value *= rhs;
            } else {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                value /= rhs;
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(sign @ ('+' | '-')) => {
                // `--x` and `++x` read as increment/decrement, not two signs.
                if self.chars.get(self.pos + 1) == Some(&sign) {
                    return Err(EvalError::RepeatedSign { position: self.pos });
                }
                self.pos += 1;
                let value = self.factor()?;
                Ok(if sign == '-' { -value } else { value })
            }
            Some(_) => self.number(),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return match self.peek() {
                Some(ch) => Err(EvalError::UnexpectedChar {
                    ch,
                    position: self.pos,
                }),
                None => Err(EvalError::UnexpectedEnd),
            };
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        digits.parse::<f64>().map_err(|_| EvalError::UnexpectedChar {
            ch: self.chars[start],
            position: start,
        })
    }
}
