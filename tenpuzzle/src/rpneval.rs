use crate::parser::Postfix;
use crate::skeleton;
use crate::token::PolishToken;
use std::fmt;

/// Precondition violations in a postfix stream that skipped validation.
#[derive(Debug, PartialEq)]
pub enum EvalErr {
    StackUnderflow,
    Unbalanced(usize),
    BadToken(char),
}

// integer results within this distance absorb rounding from chained division
pub const TOLERANCE: f64 = 1e-9;
pub const TARGET: i64 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    Invalid,
    NotInteger,
    NotTen,
    Ten,
}

impl Verdict {
    pub fn classify(result: f64) -> Verdict {
        let rounded = result.round();
        // inf and NaN fall through here: inf - inf is NaN
        if (result - rounded).abs() < TOLERANCE {
            if rounded == TARGET as f64 {
                Verdict::Ten
            } else {
                Verdict::NotTen
            }
        } else {
            Verdict::NotInteger
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            Verdict::Invalid => "Invalid input",
            Verdict::NotInteger => "Not an integer",
            Verdict::NotTen => "Not 10",
            Verdict::Ten => "10",
        };
        write!(f, "{}", msg)
    }
}

pub fn eval(rpn: &Postfix) -> Result<f64, EvalErr> {
    let mut operands = Vec::new();

    for token in rpn.0.iter() {
        match *token {
            PolishToken::Digit(d) => operands.push(d as f64),
            PolishToken::Op(op) => {
                let second = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                let first = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                operands.push(op.apply(first, second));
            }
            PolishToken::Unknown(c) => return Err(EvalErr::BadToken(c)),
        }
        debug!("eval: {} {:?}", token, operands);
    }
    match operands.len() {
        1 => operands.pop().ok_or(EvalErr::StackUnderflow),
        depth => Err(EvalErr::Unbalanced(depth)),
    }
}

/// Judge one puzzle answer given in postfix form.
pub fn check(line: &str) -> Verdict {
    if !skeleton::validate(line).is_valid() {
        return Verdict::Invalid;
    }
    match eval(&Postfix::from(line)) {
        Ok(result) => Verdict::classify(result),
        // unreachable once the skeleton matched
        Err(_) => Verdict::Invalid,
    }
}
