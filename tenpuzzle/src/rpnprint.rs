use crate::parser::Postfix;
use crate::rpneval::EvalErr;
use crate::token::{BinOp, PolishToken};

// A rendered sub-expression. `additive` records whether a '+' or '-' appears
// anywhere in `text`, parenthesized or not.
struct Rendered {
    text: String,
    additive: bool,
}

impl Rendered {
    fn grouped(self, wrap: bool) -> String {
        if wrap && self.additive {
            format!("({})", self.text)
        } else {
            self.text
        }
    }
}

fn combine(op: BinOp, first: Rendered, second: Rendered) -> Rendered {
    let additive = op.is_additive() || first.additive || second.additive;
    let lhs = first.grouped(matches!(op, BinOp::Mul | BinOp::Div));
    let rhs = second.grouped(op != BinOp::Add);
    Rendered {
        text: format!("{} {} {}", lhs, op, rhs),
        additive,
    }
}

/// Render a postfix stream as infix.
///
/// Only sums and differences ever get parentheses: on either side of '*' and
/// '/', and on the right of '-'. A sub-expression that holds a '+' or '-'
/// anywhere counts as a sum, so "12+3*4*" renders as "((1 + 2) * 3) * 4",
/// and a product on the right of '/' is left bare ("123*/" is "1 / 2 * 3").
pub fn decode(rpn: &Postfix) -> Result<String, EvalErr> {
    let mut exprs: Vec<Rendered> = Vec::new();

    for token in rpn.0.iter() {
        match *token {
            PolishToken::Digit(d) => exprs.push(Rendered {
                text: d.to_string(),
                additive: false,
            }),
            PolishToken::Op(op) => {
                let second = exprs.pop().ok_or(EvalErr::StackUnderflow)?;
                let first = exprs.pop().ok_or(EvalErr::StackUnderflow)?;
                let node = combine(op, first, second);
                debug!("decode: {} -> {}", op, node.text);
                exprs.push(node);
            }
            PolishToken::Unknown(c) => return Err(EvalErr::BadToken(c)),
        }
    }
    match exprs.len() {
        1 => exprs.pop().map(|e| e.text).ok_or(EvalErr::StackUnderflow),
        depth => Err(EvalErr::Unbalanced(depth)),
    }
}
