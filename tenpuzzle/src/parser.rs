use crate::token::{tokenize, BinOp, PolishToken};
use std::fmt;

/// A postfix token stream, eg: "12+3*" for (1 + 2) * 3.
#[derive(Clone, PartialEq, Debug)]
pub struct Postfix(pub Vec<PolishToken>);

impl Postfix {
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().filter_map(|t| match *t {
            PolishToken::Digit(d) => Some(d),
            _ => None,
        })
    }
}

impl From<&str> for Postfix {
    fn from(src: &str) -> Postfix {
        Postfix(tokenize(src).collect())
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in self.0.iter() {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[derive(PartialEq, Debug)]
pub enum ParseError {
    BadToken(char),
    MultiDigit,
    MissingOpenParen,
    MissingCloseParen,
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum InfixToken {
    Digit(u8),
    Op(BinOp),
    OParen,
    CParen,
}

fn lex(expr: &str) -> Result<Vec<InfixToken>, ParseError> {
    let mut tokens = Vec::new();
    for c in expr.chars().filter(|c| !c.is_whitespace()) {
        let token = match c {
            '(' => InfixToken::OParen,
            ')' => InfixToken::CParen,
            '0'..='9' => InfixToken::Digit(c as u8 - b'0'),
            _ => InfixToken::Op(BinOp::from_char(c).ok_or(ParseError::BadToken(c))?),
        };
        // operands are single digits, "12" is never two operands
        if let (Some(InfixToken::Digit(_)), InfixToken::Digit(_)) = (tokens.last(), token) {
            return Err(ParseError::MultiDigit);
        }
        tokens.push(token);
    }
    Ok(tokens)
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<Postfix, ParseError> {
        let rpn = Self::parse(lex(expr)?)?;
        debug!("parse: {:?} -> {}", expr, rpn);
        Ok(rpn)
    }

    fn parse(tokens: Vec<InfixToken>) -> Result<Postfix, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            match token {
                InfixToken::Digit(d) => out.push(PolishToken::Digit(d)),
                InfixToken::OParen => stack.push(token),
                InfixToken::CParen => loop {
                    match stack.pop() {
                        Some(InfixToken::OParen) => break,
                        Some(InfixToken::Op(op)) => out.push(PolishToken::Op(op)),
                        _ => return Err(ParseError::MissingOpenParen),
                    }
                },
                InfixToken::Op(op) => {
                    while let Some(&InfixToken::Op(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        out.push(PolishToken::Op(top));
                        stack.pop();
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                InfixToken::Op(op) => out.push(PolishToken::Op(op)),
                _ => return Err(ParseError::MissingCloseParen),
            }
        }
        Ok(Postfix(out))
    }
}
