//! Structural validation of a puzzle answer in postfix form.
//!
//! An answer uses exactly four digits 1-9 and three binary operators, so its
//! postfix form is 7 characters long and its operand/operator layout is the
//! postorder traversal of one of the full binary trees with four leaves.

use crate::token::{tokenize, PolishToken};

pub const EXPR_LEN: usize = 7;
pub const OPERANDS: usize = 4;

/// Postfix layouts of every 4-leaf full binary tree ('x' operand, 'o' operator).
pub const SKELETONS: [&str; 5] = ["xxxxooo", "xxxoxoo", "xxxooxo", "xxoxxoo", "xxoxoxo"];

#[derive(Clone, PartialEq, Debug)]
pub enum Reject {
    Length(usize),
    BadChar(char),
    DigitCount(usize),
    Shape(String),
}

#[derive(Clone, PartialEq, Debug)]
pub enum Validity {
    Valid,
    Invalid(Reject),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        *self == Validity::Valid
    }
}

/// Operand/operator layout of `expr`, unknown characters map to '?'.
pub fn pattern(expr: &str) -> String {
    tokenize(expr).map(|t| t.skeleton()).collect()
}

fn allowed(token: &PolishToken) -> bool {
    match *token {
        PolishToken::Digit(d) => (1..=9).contains(&d),
        PolishToken::Op(_) => true,
        PolishToken::Unknown(_) => false,
    }
}

pub fn validate(expr: &str) -> Validity {
    let verdict = check_shape(expr);
    if let Validity::Invalid(ref reason) = verdict {
        debug!("validate: {:?} rejected: {:?}", expr, reason);
    }
    verdict
}

fn check_shape(expr: &str) -> Validity {
    let len = expr.chars().count();
    if len != EXPR_LEN {
        return Validity::Invalid(Reject::Length(len));
    }
    if let Some(bad) = expr.chars().find(|&c| !allowed(&PolishToken::from_char(c))) {
        return Validity::Invalid(Reject::BadChar(bad));
    }
    let digits = tokenize(expr)
        .filter(|t| matches!(t, PolishToken::Digit(_)))
        .count();
    if digits != OPERANDS {
        return Validity::Invalid(Reject::DigitCount(digits));
    }
    let shape = pattern(expr);
    if !SKELETONS.contains(&shape.as_str()) {
        return Validity::Invalid(Reject::Shape(shape));
    }
    Validity::Valid
}

/// Postorder layouts of all full binary trees with `leaves` leaves.
pub fn derive(leaves: usize) -> Vec<String> {
    match leaves {
        0 => Vec::new(),
        1 => vec!["x".to_string()],
        _ => {
            let mut shapes = Vec::new();
            for split in 1..leaves {
                for lhs in derive(split) {
                    for rhs in derive(leaves - split) {
                        shapes.push(format!("{}{}o", lhs, rhs));
                    }
                }
            }
            shapes
        }
    }
}
